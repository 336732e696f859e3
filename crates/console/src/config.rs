/// Divider width of the stock-price menu.
pub const STOCKS_DIVIDER_WIDTH: usize = 40;

/// Divider width of the library menu.
pub const LIBRARY_DIVIDER_WIDTH: usize = 54;

/// Console rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Width of divider lines such as `=====`.
    pub divider_width: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            divider_width: STOCKS_DIVIDER_WIDTH,
        }
    }
}

impl ConsoleConfig {
    pub fn for_library() -> Self {
        Self {
            divider_width: LIBRARY_DIVIDER_WIDTH,
        }
    }

    pub fn with_divider_width(mut self, width: usize) -> Self {
        self.divider_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_menu_has_its_own_divider_width() {
        assert_eq!(ConsoleConfig::default().divider_width, 40);
        assert_eq!(ConsoleConfig::for_library().divider_width, 54);

        let narrow = ConsoleConfig::for_library().with_divider_width(10);
        assert_eq!(narrow.divider_width, 10);
    }
}
