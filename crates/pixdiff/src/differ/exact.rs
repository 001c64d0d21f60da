use crate::error::DiffError;
use crate::grid::PixelGrid;
use crate::options::DiffOptions;
use crate::result::DiffResult;

use super::{PixelDiffer, scan};

/// Flags a pixel iff any of its four RGBA channels differ.
#[derive(Clone, Debug)]
pub struct ExactDiffer {
    /// `None` makes every `diff` call fail with `MissingArgument("options")`.
    pub options: Option<DiffOptions>,
}

impl ExactDiffer {
    pub fn new(options: DiffOptions) -> Self {
        Self {
            options: Some(options),
        }
    }
}

impl Default for ExactDiffer {
    fn default() -> Self {
        Self::new(DiffOptions::default())
    }
}

impl PixelDiffer for ExactDiffer {
    fn name(&self) -> &str {
        "exact"
    }

    fn diff<G: PixelGrid>(&self, left: &G, right: &G) -> Result<DiffResult<G>, DiffError> {
        let options = self
            .options
            .as_ref()
            .ok_or(DiffError::MissingArgument("options"))?;
        Ok(scan(self.name(), left, right, options, |p1, p2| p1 != p2))
    }
}
