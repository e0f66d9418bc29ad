//! Construction options for a [`Tracer`](crate::Tracer).

use serde::{Deserialize, Serialize};

use crate::errors::OptionError;
use crate::format::FormatterSpec;

/// Which end of the cause chain is emitted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ordering {
    /// Root cause first, outermost error last.
    #[default]
    OldestFirst,
    /// Outermost error first, root cause last.
    NewestFirst,
}

/// How much of each error is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Detail {
    /// The error's own message only.
    Brief,
    /// The message plus any origin information the error carries.
    #[default]
    Detailed,
}

impl Detail {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Detailed
        } else {
            Self::Brief
        }
    }
}

/// Resolved tracer settings. Options are applied on top of the defaults in order.
#[derive(Debug, Clone, Default)]
pub struct TraceSettings {
    pub ordering: Ordering,
    pub detail: Detail,
    pub formatter: FormatterSpec,
}

/// A single construction option.
#[derive(Debug, Clone)]
pub enum TraceOption {
    Ordering(Ordering),
    Detail(Detail),
    Formatter(FormatterSpec),
}

impl TraceOption {
    /// Name reported in construction errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ordering(_) => "ordering",
            Self::Detail(_) => "detail",
            Self::Formatter(_) => "formatter",
        }
    }

    pub fn apply(&self, settings: &mut TraceSettings) -> Result<(), OptionError> {
        match self {
            Self::Ordering(ordering) => settings.ordering = *ordering,
            Self::Detail(detail) => settings.detail = *detail,
            Self::Formatter(spec) => {
                spec.validate()?;
                settings.formatter = spec.clone();
            }
        }
        Ok(())
    }
}
