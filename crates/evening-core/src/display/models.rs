//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer and the MCP server can share
//! it unchanged.

use std::fmt;

use crate::models::{
    category_title, ActivityDefinition, Atmosphere, DressCode, DurationBucket, Itinerary,
    ScheduledEntry, Transportation,
};

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Atmosphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Transportation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DressCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.label)
    }
}

impl fmt::Display for ScheduledEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}: {} {}", self.time_label, self.icon, self.label)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(
            f,
            "📍 {} | 💰 Budget: ${} | 👔 {}",
            self.location, self.budget, self.dress_code
        )?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = category_title(&self.category);
        writeln!(f, "# Your {title} Itinerary")?;
        writeln!(f)?;

        if self.entries.is_empty() {
            writeln!(f, "No activities scheduled.")?;
            writeln!(f)?;
        }
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }

        writeln!(f, "## 💡 Tips for Your {title}")?;
        writeln!(f)?;
        for tip in &self.tips {
            writeln!(f, "- {tip}")?;
        }

        Ok(())
    }
}
