//! 章节表单

use super::{parse_number, require_text, Form};
use crate::application::error::ApplicationError;
use crate::domain::project::{Chapter, ChapterStatus};

/// 章节表单
///
/// 数字字段以文本形式录入，提交时再解析
#[derive(Debug, Clone)]
pub struct ChapterForm {
    draft: Chapter,
    sort_order_input: String,
    target_word_count_input: String,
    is_edit: bool,
}

impl ChapterForm {
    /// 新建章节，排在 `next_sort_order`
    pub fn create(next_sort_order: i32) -> Self {
        Self {
            draft: Chapter::new("", next_sort_order),
            sort_order_input: next_sort_order.to_string(),
            target_word_count_input: String::new(),
            is_edit: false,
        }
    }

    pub fn edit(chapter: &Chapter) -> Self {
        Self {
            draft: chapter.clone(),
            sort_order_input: chapter.sort_order.to_string(),
            target_word_count_input: chapter
                .target_word_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
            is_edit: true,
        }
    }

    pub fn draft(&self) -> &Chapter {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// 修改正文并同步字数
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
        self.draft.recount_words();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.draft.summary = non_empty(summary.into());
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = non_empty(notes.into());
    }

    pub fn set_status(&mut self, status: ChapterStatus) {
        self.draft.status = status;
    }

    pub fn set_chapter_type(&mut self, chapter_type: impl Into<String>) {
        self.draft.chapter_type = non_empty(chapter_type.into());
    }

    pub fn set_sort_order_input(&mut self, input: impl Into<String>) {
        self.sort_order_input = input.into();
    }

    pub fn set_target_word_count_input(&mut self, input: impl Into<String>) {
        self.target_word_count_input = input.into();
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Form for ChapterForm {
    type Draft = Chapter;

    fn is_edit(&self) -> bool {
        self.is_edit
    }

    fn validated(&self) -> Result<Chapter, ApplicationError> {
        require_text("title", &self.draft.title, "章节标题")?;

        let sort_order = parse_number("sortOrder", &self.sort_order_input, "章节序号", 0)?
            .ok_or_else(|| ApplicationError::validation("sortOrder", "请填写章节序号"))?;
        let target = parse_number("targetWordCount", &self.target_word_count_input, "目标字数", 0)?;

        let mut chapter = self.draft.clone();
        chapter.sort_order = i32::try_from(sort_order)
            .map_err(|_| ApplicationError::validation("sortOrder", "章节序号过大"))?;
        chapter.target_word_count = target
            .map(u32::try_from)
            .transpose()
            .map_err(|_| ApplicationError::validation("targetWordCount", "目标字数过大"))?;
        Ok(chapter)
    }
}
