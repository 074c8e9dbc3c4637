//! 页面级弹窗状态
//!
//! 同一时间最多一个弹窗，用带数据的枚举表达，不用多个布尔标志

/// 弹窗模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Add,
    Edit,
    Delete,
}

/// 弹窗状态
///
/// `Edit`/`Delete` 携带目标实体的独立副本，与列表数据互不影响
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Add,
    Edit(T),
    Delete(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// 当前模式；关闭状态视为 `Add`
    pub fn mode(&self) -> ModalMode {
        match self {
            ModalState::Closed | ModalState::Add => ModalMode::Add,
            ModalState::Edit(_) => ModalMode::Edit,
            ModalState::Delete(_) => ModalMode::Delete,
        }
    }

    /// 弹窗针对的实体
    pub fn target(&self) -> Option<&T> {
        match self {
            ModalState::Edit(entity) | ModalState::Delete(entity) => Some(entity),
            ModalState::Closed | ModalState::Add => None,
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_reports_add_mode() {
        let modal: ModalState<String> = ModalState::default();
        assert!(!modal.is_open());
        assert_eq!(modal.mode(), ModalMode::Add);
        assert!(modal.target().is_none());
    }

    #[test]
    fn test_close_resets_everything() {
        let mut modal = ModalState::Delete("w-42".to_string());
        assert!(modal.is_open());
        assert_eq!(modal.mode(), ModalMode::Delete);
        assert_eq!(modal.target().map(String::as_str), Some("w-42"));

        modal.close();
        assert_eq!(modal, ModalState::Closed);
        assert_eq!(modal.mode(), ModalMode::Add);
        assert!(modal.target().is_none());
    }
}
