//! Traits shared by the nodes of the object model

/// Common interface used by the tree renderers
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    /// 1-based source line the node was recognized at, if it has one
    fn line(&self) -> Option<usize> {
        None
    }
}
