//! Table Widget - Paged rows of text cells.
//!
//! The table is data-driven rather than slot-driven: columns and rows
//! arrive as props, and the widget emits head, body, and foot sections
//! built from plain views and text leaves. The body shows one page at a
//! time; Back and Next handlers in the foot move the page, clamped to
//! the available rows.

use std::cell::Cell;
use std::rc::Rc;

use crate::node::{Handler, Node, Props};
use crate::types::TypeTag;

use super::leaves::text;

// =============================================================================
// Props
// =============================================================================

/// Configuration for [`Table`].
#[derive(Debug, Clone)]
pub struct TableProps {
    /// Column names, rendered uppercased in the head row.
    pub columns: Vec<String>,
    /// Row cells in column order.
    pub rows: Vec<Vec<String>>,
    /// Rows shown per page.
    pub page_size: usize,
    /// Page to start from.
    pub page: usize,
    /// Width passthrough, merged beneath author style.
    pub width: Option<String>,
    /// Height passthrough, merged beneath author style.
    pub height: Option<String>,
    /// Author style, wins over the computed passthroughs.
    pub style: Props,
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            page_size: 15,
            page: 0,
            width: None,
            height: None,
            style: Props::new(),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// Paged table host.
pub struct Table {
    props: TableProps,
    page: Rc<Cell<usize>>,
}

impl Table {
    /// Create a table. A zero page size is lifted to one so paging
    /// always makes progress.
    pub fn new(mut props: TableProps) -> Self {
        props.page_size = props.page_size.max(1);
        let page = Rc::new(Cell::new(props.page));
        Self { props, page }
    }

    /// Current zero-based page.
    pub fn page(&self) -> usize {
        self.page.get()
    }

    /// Build the table tree for this pass.
    ///
    /// With no rows at all, only the empty container is produced.
    pub fn render(&self) -> Node {
        let container = Node::new(TypeTag::View);
        if self.props.rows.is_empty() {
            return container;
        }

        let mut table = Node::new(TypeTag::Table);
        let style = self.table_style();
        if !style.is_empty() {
            table = table.prop("style", style);
        }

        container.child(table.child(self.head()).child(self.body()).child(self.foot()))
    }

    fn table_style(&self) -> Props {
        let mut computed = Props::new();
        if let Some(ref width) = self.props.width {
            computed.set("width", width.as_str());
        }
        if let Some(ref height) = self.props.height {
            computed.set("height", height.as_str());
        }
        Props::layered(&[&computed, &self.props.style])
    }

    fn head(&self) -> Node {
        let cells = self.props.columns.iter().map(|name| text(name.to_uppercase()));
        Node::new(TypeTag::View)
            .prop("section", "head")
            .child(Node::new(TypeTag::View).append(cells))
    }

    fn body(&self) -> Node {
        let len = self.props.rows.len();
        let start = (self.page.get() * self.props.page_size).min(len);
        let end = (start + self.props.page_size).min(len);

        let rows = self.props.rows[start..end].iter().map(|row| {
            Node::new(TypeTag::View).append(row.iter().map(|cell| text(cell.as_str())))
        });
        Node::new(TypeTag::View).prop("section", "body").append(rows)
    }

    /// Back, a one-based page label, Next.
    fn foot(&self) -> Node {
        let page = Rc::clone(&self.page);
        let back = Handler::new(move || {
            if page.get() > 0 {
                page.set(page.get() - 1);
            }
        });

        let page = Rc::clone(&self.page);
        let page_size = self.props.page_size;
        let row_count = self.props.rows.len();
        let next = Handler::new(move || {
            if (page.get() + 1) * page_size < row_count {
                page.set(page.get() + 1);
            }
        });

        Node::new(TypeTag::View)
            .prop("section", "foot")
            .child(text("Back").prop("on_click", back))
            .child(text((self.page.get() + 1).to_string()))
            .child(text("Next").prop("on_click", next))
    }
}

// =============================================================================
// Tests
// =============================================================================
