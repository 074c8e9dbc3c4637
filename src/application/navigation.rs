//! 侧边栏当前路由匹配

/// 只做精确匹配的入口
const EXACT_ONLY: &[&str] = &["/", "/dashboard"];

/// 侧边栏条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// 默认侧边栏
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("工作台", "/dashboard"),
        NavItem::new("我的作品", "/projects"),
        NavItem::new("世界观", "/worlds"),
        NavItem::new("AI 助手", "/chat"),
        NavItem::new("设置", "/settings"),
    ]
}

/// 去掉查询串、锚点与末尾斜杠
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// `href` 对应的条目在 `current` 路径下是否高亮
pub fn is_active(current: &str, href: &str) -> bool {
    let current = normalize(current);
    let href = normalize(href);

    if current == href {
        return true;
    }
    if EXACT_ONLY.contains(&href) {
        return false;
    }
    current
        .strip_prefix(href)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// 选出最具体（href 最长）的高亮条目
pub fn active_item<'a>(items: &'a [NavItem], current: &str) -> Option<&'a NavItem> {
    items
        .iter()
        .filter(|item| is_active(current, &item.href))
        .max_by_key(|item| normalize(&item.href).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_only_entries() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/projects", "/"));
        assert!(is_active("/dashboard/", "/dashboard"));
        assert!(!is_active("/dashboard/stats", "/dashboard"));
    }

    #[test]
    fn test_prefix_respects_segment_boundary() {
        assert!(is_active("/projects/7/chapters", "/projects"));
        assert!(!is_active("/projects-archive", "/projects"));
        assert!(is_active("/worlds?page=2", "/worlds"));
    }

    #[test]
    fn test_active_item_prefers_longest_match() {
        let mut items = default_nav_items();
        items.push(NavItem::new("章节", "/projects/7/chapters"));

        let active = active_item(&items, "/projects/7/chapters/3").unwrap();
        assert_eq!(active.label, "章节");

        assert_eq!(active_item(&items, "/worlds/1").unwrap().label, "世界观");
        assert!(active_item(&items, "/unknown").is_none());
    }
}
