//! 世界设定表单

use super::{require_text, Form};
use crate::application::error::ApplicationError;
use crate::domain::world::{World, WorldElement, WorldElementType};
use crate::domain::EntityId;

/// 世界表单
#[derive(Debug, Clone)]
pub struct WorldForm {
    draft: World,
    is_edit: bool,
}

impl WorldForm {
    /// 新建：空白草稿，占位 ID
    pub fn create() -> Self {
        Self {
            draft: World::new("", ""),
            is_edit: false,
        }
    }

    /// 编辑：复制一份已有实体
    pub fn edit(world: &World) -> Self {
        Self {
            draft: world.clone(),
            is_edit: true,
        }
    }

    pub fn draft(&self) -> &World {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
    }

    /// 追加元素，返回其占位 ID
    pub fn add_element(
        &mut self,
        element_type: WorldElementType,
        name: impl Into<String>,
    ) -> EntityId {
        let element = WorldElement::new(element_type, name);
        let id = element.id.clone();
        self.draft.elements.push(element);
        id
    }

    /// 原地修改元素；找不到时返回 false
    pub fn update_element(
        &mut self,
        id: &EntityId,
        update: impl FnOnce(&mut WorldElement),
    ) -> bool {
        match self.draft.elements.iter_mut().find(|e| &e.id == id) {
            Some(element) => {
                update(element);
                true
            }
            None => false,
        }
    }

    pub fn remove_element(&mut self, id: &EntityId) -> bool {
        let before = self.draft.elements.len();
        self.draft.elements.retain(|e| &e.id != id);
        self.draft.elements.len() != before
    }

    /// 调整元素顺序，目标位置超出范围时放到末尾
    pub fn move_element(&mut self, id: &EntityId, to: usize) -> bool {
        let Some(from) = self.draft.elements.iter().position(|e| &e.id == id) else {
            return false;
        };
        let element = self.draft.elements.remove(from);
        let to = to.min(self.draft.elements.len());
        self.draft.elements.insert(to, element);
        true
    }
}

impl Form for WorldForm {
    type Draft = World;

    fn is_edit(&self) -> bool {
        self.is_edit
    }

    fn validated(&self) -> Result<World, ApplicationError> {
        require_text("name", &self.draft.name, "世界名称")?;
        for element in &self.draft.elements {
            require_text("elements.name", &element.name, "元素名称")?;
        }
        Ok(self.draft.clone())
    }
}
