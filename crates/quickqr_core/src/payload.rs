/// Square grid of QR modules, row-major, `true` meaning dark.
///
/// The grid excludes the quiet zone; renderers add their own margin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleGrid {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Builds a grid from row-major modules. Returns `None` when the module
    /// count is not `width * width`.
    pub fn new(width: usize, modules: Vec<bool>) -> Option<Self> {
        if width.checked_mul(width)? != modules.len() {
            return None;
        }
        Some(Self { width, modules })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Out-of-range coordinates read as light, which is what a quiet zone is.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }
        self.modules.get(y * self.width + x).copied().unwrap_or(false)
    }
}

/// Encoded image: a self-contained PNG data URI plus the module grid it was
/// rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    data_uri: String,
    grid: ModuleGrid,
}

impl ImagePayload {
    pub fn new(data_uri: impl Into<String>, grid: ModuleGrid) -> Self {
        Self {
            data_uri: data_uri.into(),
            grid,
        }
    }

    /// Content used for display, file export and clipboard export.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    pub fn grid(&self) -> &ModuleGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rejects_mismatched_module_count() {
        assert!(ModuleGrid::new(2, vec![true, false, true]).is_none());
        assert!(ModuleGrid::new(2, vec![true, false, true, false]).is_some());
    }

    #[test]
    fn out_of_range_modules_are_light() {
        let grid = ModuleGrid::new(2, vec![true, true, true, true]).unwrap();
        assert!(grid.is_dark(1, 1));
        assert!(!grid.is_dark(2, 0));
        assert!(!grid.is_dark(0, 5));
    }
}
