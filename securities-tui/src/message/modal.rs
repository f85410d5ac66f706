//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（按取消回答）
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 上一个选项（选择框 / 确认按钮）
    PrevOption,

    /// 下一个选项
    NextOption,

    /// 列表中上移
    SelectPrevious,

    /// 列表中下移
    SelectNext,

    /// 确认/提交
    Confirm,

    /// 输入字符
    Input(char),

    /// 文本框换行
    Newline,

    /// 删除字符（Backspace）
    Backspace,
}
