//! 证券列表状态

use securities_core::types::{ColumnDef, ColumnFilter, SecuritySummary};

/// 证券列表状态
#[derive(Debug, Default)]
pub struct ListState {
    /// 列定义，来自 SearchGrid::load
    pub columns: Vec<ColumnDef>,
    /// 当前页的行
    pub rows: Vec<SecuritySummary>,
    /// 服务端的总条数
    pub total: u32,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在等待第一批数据
    pub loading: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// 获取当前选中的证券
    pub fn selected_row(&self) -> Option<&SecuritySummary> {
        self.rows.get(self.selected)
    }

    /// 替换行数据，尽量保持选中同一证券
    pub fn set_rows(&mut self, rows: Vec<SecuritySummary>, total: u32) {
        let keep = self.selected_row().map(|r| r.id.clone());
        self.rows = rows;
        self.total = total;
        self.loading = false;
        self.selected = keep
            .and_then(|id| self.rows.iter().position(|r| r.id == id))
            .unwrap_or(0);
    }

    /// 类型列的可选值；类型尚未解析时为空
    pub fn type_options(&self) -> Vec<String> {
        self.columns
            .iter()
            .find_map(|c| match &c.filter {
                ColumnFilter::Select { options, .. } if c.field == "type" => Some(options.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }
}
