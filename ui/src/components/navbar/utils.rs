use crate::config::NavItem;

/// Index of the item matching `pathname`. The first exact match wins, so at
/// most one item is ever active.
pub fn active_index(items: &[NavItem], pathname: &str) -> Option<usize> {
    items.iter().position(|item| item.path == pathname)
}

pub fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "relative pb-1 text-purple-600 font-semibold"
    } else {
        "relative pb-1"
    }
}

pub fn panel_link_class(active: bool) -> &'static str {
    if active {
        "block py-2 px-2 rounded-md bg-purple-50 text-purple-600 font-semibold"
    } else {
        "block py-2 px-2 rounded-md hover:bg-gray-50"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NavItem> {
        [("Home", "/"), ("Statistics", "/statistics"), ("Dashboard", "/dashboard")]
            .into_iter()
            .map(|(label, path)| NavItem {
                label: label.into(),
                path: path.into(),
            })
            .collect()
    }

    #[test]
    fn matches_exact_path() {
        let items = items();
        assert_eq!(active_index(&items, "/"), Some(0));
        assert_eq!(active_index(&items, "/statistics"), Some(1));
        assert_eq!(active_index(&items, "/dashboard"), Some(2));
    }

    #[test]
    fn no_match_means_no_active_item() {
        let items = items();
        assert_eq!(active_index(&items, "/statistics/"), None);
        assert_eq!(active_index(&items, "/shop"), None);
        assert_eq!(active_index(&items, ""), None);
        assert_eq!(active_index(&[], "/"), None);
    }

    #[test]
    fn duplicate_paths_mark_only_the_first() {
        let mut items = items();
        items.push(NavItem {
            label: "Again".into(),
            path: "/dashboard".into(),
        });

        let active: Vec<_> = (0..items.len())
            .filter(|i| active_index(&items, "/dashboard") == Some(*i))
            .collect();
        assert_eq!(active, [2]);
    }
}
