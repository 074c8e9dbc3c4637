//! 作品信息表单

use super::{parse_number, require_text, Form};
use crate::application::error::ApplicationError;
use crate::domain::project::{NovelProject, ProjectStatus};

#[derive(Debug, Clone)]
pub struct ProjectForm {
    draft: NovelProject,
    tags_input: String,
    word_count_goal_input: String,
    is_edit: bool,
}

impl ProjectForm {
    pub fn create() -> Self {
        Self {
            draft: NovelProject::default(),
            tags_input: String::new(),
            word_count_goal_input: String::new(),
            is_edit: false,
        }
    }

    pub fn edit(project: &NovelProject) -> Self {
        let goal = project.metadata.word_count_goal;
        Self {
            draft: project.clone(),
            tags_input: project.metadata.tags.join(", "),
            word_count_goal_input: if goal > 0 { goal.to_string() } else { String::new() },
            is_edit: true,
        }
    }

    pub fn draft(&self) -> &NovelProject {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.draft.genre = genre.into();
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        let style = style.into();
        self.draft.style = (!style.trim().is_empty()).then_some(style);
    }

    pub fn set_synopsis(&mut self, synopsis: impl Into<String>) {
        self.draft.metadata.synopsis = synopsis.into();
    }

    pub fn set_target_audience(&mut self, audience: impl Into<String>) {
        self.draft.metadata.target_audience = audience.into();
    }

    pub fn set_status(&mut self, status: ProjectStatus) {
        self.draft.metadata.status = status;
    }

    /// 逗号分隔的标签（中英文逗号均可）
    pub fn set_tags_input(&mut self, input: impl Into<String>) {
        self.tags_input = input.into();
    }

    pub fn set_word_count_goal_input(&mut self, input: impl Into<String>) {
        self.word_count_goal_input = input.into();
    }
}

fn split_tags(input: &str) -> Vec<String> {
    input
        .split([',', '，'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl Form for ProjectForm {
    type Draft = NovelProject;

    fn is_edit(&self) -> bool {
        self.is_edit
    }

    fn validated(&self) -> Result<NovelProject, ApplicationError> {
        require_text("title", &self.draft.title, "作品名称")?;
        require_text("genre", &self.draft.genre, "题材")?;
        let goal = parse_number("wordCountGoal", &self.word_count_goal_input, "目标字数", 0)?;

        let mut project = self.draft.clone();
        project.metadata.tags = split_tags(&self.tags_input);
        project.metadata.word_count_goal = goal
            .map(u32::try_from)
            .transpose()
            .map_err(|_| ApplicationError::validation("wordCountGoal", "目标字数过大"))?
            .unwrap_or(0);
        Ok(project)
    }
}
