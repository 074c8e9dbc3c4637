//! 大纲节点表单

use super::{parse_number, require_text, Form};
use crate::application::error::ApplicationError;
use crate::domain::project::{OutlineNode, PlotElementType};

#[derive(Debug, Clone)]
pub struct OutlineForm {
    draft: OutlineNode,
    order_input: String,
    is_edit: bool,
}

impl OutlineForm {
    pub fn create(next_order: u32) -> Self {
        Self {
            draft: OutlineNode::new("", PlotElementType::Beginning, next_order),
            order_input: next_order.to_string(),
            is_edit: false,
        }
    }

    pub fn edit(node: &OutlineNode) -> Self {
        Self {
            draft: node.clone(),
            order_input: node.order.to_string(),
            is_edit: true,
        }
    }

    pub fn draft(&self) -> &OutlineNode {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_node_type(&mut self, node_type: PlotElementType) {
        self.draft.node_type = node_type;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_order_input(&mut self, input: impl Into<String>) {
        self.order_input = input.into();
    }
}

impl Form for OutlineForm {
    type Draft = OutlineNode;

    fn is_edit(&self) -> bool {
        self.is_edit
    }

    fn validated(&self) -> Result<OutlineNode, ApplicationError> {
        require_text("title", &self.draft.title, "情节标题")?;
        let order = parse_number("order", &self.order_input, "顺序", 1)?
            .ok_or_else(|| ApplicationError::validation("order", "请填写顺序"))?;

        let mut node = self.draft.clone();
        node.order = u32::try_from(order)
            .map_err(|_| ApplicationError::validation("order", "顺序过大"))?;
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let form = OutlineForm::create(4);
        assert_eq!(form.draft().node_type, PlotElementType::Beginning);
        assert_eq!(form.draft().order, 4);
        assert!(!form.is_edit());
    }

    #[test]
    fn test_order_must_be_positive() {
        let mut form = OutlineForm::create(1);
        form.set_title("决战");
        form.set_node_type(PlotElementType::Climax);

        form.set_order_input("0");
        assert!(form.validated().is_err());

        form.set_order_input("5");
        let node = form.validated().unwrap();
        assert_eq!(node.order, 5);
        assert_eq!(node.node_type, PlotElementType::Climax);
    }
}
