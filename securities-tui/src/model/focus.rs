//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 证券列表
    #[default]
    List,
    /// 详情面板
    Detail,
}

impl FocusPanel {
    /// 切换到另一个面板；详情未打开时停留在列表
    pub fn toggle(self, detail_open: bool) -> Self {
        match self {
            FocusPanel::List if detail_open => FocusPanel::Detail,
            _ => FocusPanel::List,
        }
    }

    pub fn is_list(self) -> bool {
        matches!(self, FocusPanel::List)
    }

    pub fn is_detail(self) -> bool {
        matches!(self, FocusPanel::Detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_requires_open_detail() {
        assert_eq!(FocusPanel::List.toggle(false), FocusPanel::List);
        assert_eq!(FocusPanel::List.toggle(true), FocusPanel::Detail);
        assert_eq!(FocusPanel::Detail.toggle(true), FocusPanel::List);
    }
}
