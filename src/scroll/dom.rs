//! `LayoutNode` over the live DOM

use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use super::LayoutNode;
use crate::error::{DomError, Result};
use crate::host::window;

impl LayoutNode for Node {
    fn parent_node(&self) -> Option<Self> {
        Node::parent_node(self)
    }

    fn is_document_boundary(&self) -> bool {
        if self.node_type() == Node::DOCUMENT_NODE {
            return true;
        }
        let Some(document) = self.owner_document() else {
            return false;
        };

        let is_root = document
            .document_element()
            .map(|root| root.is_same_node(Some(self)))
            .unwrap_or(false);
        let is_body = document
            .body()
            .map(|body| body.is_same_node(Some(self)))
            .unwrap_or(false);
        is_root || is_body
    }

    fn overflow_y(&self) -> Result<Option<String>> {
        let Some(element) = self.dyn_ref::<Element>() else {
            return Ok(None);
        };

        let style = window()?
            .get_computed_style(element)
            .map_err(DomError::from_js)?;
        match style {
            Some(style) => style
                .get_property_value("overflow-y")
                .map(Some)
                .map_err(DomError::from_js),
            None => Ok(None),
        }
    }
}
