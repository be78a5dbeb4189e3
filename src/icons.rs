/// A single required icon: output filename plus exact pixel dimensions.
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
}

const fn icon(file_name: &'static str, width: u32, height: u32) -> IconSpec {
    IconSpec {
        file_name,
        width,
        height,
    }
}

/// Asset-catalog directory the icons are written into. Xcode owns this
/// directory, so the tool requires it to exist and never creates it.
pub const OUTPUT_DIR: &str = "SwipeSort/Assets.xcassets/AppIcon.appiconset";

/// Every size the AppIcon asset catalog requires, in generation order.
pub const ICON_SET: [IconSpec; 15] = [
    icon("AppIcon-20x20@1x.png", 20, 20),
    icon("AppIcon-20x20@2x.png", 40, 40),
    icon("AppIcon-20x20@3x.png", 60, 60),
    icon("AppIcon-29x29@1x.png", 29, 29),
    icon("AppIcon-29x29@2x.png", 58, 58),
    icon("AppIcon-29x29@3x.png", 87, 87),
    icon("AppIcon-40x40@1x.png", 40, 40),
    icon("AppIcon-40x40@2x.png", 80, 80),
    icon("AppIcon-40x40@3x.png", 120, 120),
    icon("AppIcon-60x60@2x.png", 120, 120),
    icon("AppIcon-60x60@3x.png", 180, 180),
    icon("AppIcon-76x76@1x.png", 76, 76),
    icon("AppIcon-76x76@2x.png", 152, 152),
    icon("AppIcon-83.5x83.5@2x.png", 167, 167),
    icon("AppIcon-1024x1024.png", 1024, 1024),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_fifteen_distinct_entries() {
        let names: HashSet<_> = ICON_SET.iter().map(|s| s.file_name).collect();
        assert_eq!(names.len(), 15);
        for spec in &ICON_SET {
            assert!(spec.width > 0 && spec.height > 0, "{}", spec.file_name);
        }
    }

    #[test]
    fn marketing_icon_closes_the_table() {
        let last = ICON_SET.last().unwrap();
        assert_eq!(last.file_name, "AppIcon-1024x1024.png");
        assert_eq!((last.width, last.height), (1024, 1024));
    }
}
