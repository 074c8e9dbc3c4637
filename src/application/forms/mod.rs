//! 表单草稿
//!
//! 每个表单持有一份独立草稿（编辑时从已有实体复制，新建时取默认值），
//! 提交时做最基本的校验（必填、最小值、数字类型），然后把完整草稿交给保存回调。
//! 没有跨字段校验。

mod chapter_form;
mod outline_form;
mod project_form;
mod world_form;

use std::future::Future;

use crate::application::error::ApplicationError;

pub use chapter_form::ChapterForm;
pub use outline_form::OutlineForm;
pub use project_form::ProjectForm;
pub use world_form::WorldForm;

/// 可提交的表单
pub trait Form {
    type Draft;

    /// 是否为编辑已有实体
    fn is_edit(&self) -> bool;

    /// 校验并产出完整草稿
    fn validated(&self) -> Result<Self::Draft, ApplicationError>;
}

/// 校验表单，通过后调用保存回调
pub async fn submit<Fm, F, Fut>(form: &Fm, on_save: F) -> Result<(), ApplicationError>
where
    Fm: Form,
    F: FnOnce(Fm::Draft) -> Fut,
    Fut: Future<Output = Result<(), ApplicationError>>,
{
    let draft = form.validated()?;
    on_save(draft).await
}

/// 必填文本
fn require_text(field: &'static str, value: &str, label: &str) -> Result<(), ApplicationError> {
    if value.trim().is_empty() {
        return Err(ApplicationError::validation(field, format!("请填写{}", label)));
    }
    Ok(())
}

/// 数字输入框：空值为 None，非数字或小于下限报错
fn parse_number(
    field: &'static str,
    input: &str,
    label: &str,
    min: i64,
) -> Result<Option<i64>, ApplicationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let value: i64 = input
        .parse()
        .map_err(|_| ApplicationError::validation(field, format!("{}必须是整数", label)))?;
    if value < min {
        return Err(ApplicationError::validation(
            field,
            format!("{}不能小于 {}", label, min),
        ));
    }
    Ok(Some(value))
}
