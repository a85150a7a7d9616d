use crate::user_config::{UserConfig, ViewStyle};

/// Class fragments derived from the user's home view style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutClasses {
    pub view_style: ViewStyle,
    pub boxed: Option<String>,
    pub grid: Option<String>,
}

pub fn layout_classes(config: &UserConfig) -> LayoutClasses {
    let view_style = config.view_style_home;
    if view_style != ViewStyle::Grid {
        return LayoutClasses {
            view_style,
            ..Default::default()
        };
    }

    LayoutClasses {
        view_style,
        boxed: Some(format!("boxed-{}", config.grid_items)),
        grid: Some(format!("grid-{}", config.grid_items)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_with_four_items() {
        let config = UserConfig {
            view_style_home: ViewStyle::Grid,
            grid_items: 4,
            ..Default::default()
        };
        let classes = layout_classes(&config);
        assert_eq!(classes.boxed.as_deref(), Some("boxed-4"));
        assert_eq!(classes.grid.as_deref(), Some("grid-4"));
        assert_eq!(classes.view_style.as_str(), "grid");
    }

    #[test]
    fn list_has_no_grid_fragments() {
        let config = UserConfig {
            view_style_home: ViewStyle::List,
            grid_items: 4,
            ..Default::default()
        };
        let classes = layout_classes(&config);
        assert_eq!(classes.boxed, None);
        assert_eq!(classes.grid, None);
        assert_eq!(classes.view_style, ViewStyle::List);
    }
}
