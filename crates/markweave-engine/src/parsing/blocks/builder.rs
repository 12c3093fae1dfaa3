use crate::dom::{Dom, NodeId};
use crate::parsing::ParseError;
use crate::parsing::inline::render_inline;

use super::{
    classify::LineClassifier,
    kinds::{CodeFence, TableRow},
    types::{BlockState, LineKind},
};

/// Block state machine driving the element tree, one line at a time.
///
/// Holds the single parser cursor: the node currently receiving children
/// and the open-block state. Every handler preserves the invariant that
/// `block_state == None` exactly when the insertion point is back at the
/// document root (the body element in full-page mode).
pub struct DocumentBuilder {
    dom: Dom,
    insertion_point: NodeId,
    block_state: BlockState,
    classifier: LineClassifier,
}

impl DocumentBuilder {
    /// Creates a builder. `full_page` roots the tree at
    /// `<html><head></head><body>` with the body as insertion point;
    /// otherwise the root is an invisible pass-through container.
    pub fn new(full_page: bool) -> Self {
        let (dom, insertion_point) = if full_page {
            let mut dom = Dom::with_root("html");
            let head = dom.create_element("head");
            dom.append_child(dom.root(), head);
            let body = dom.create_element("body");
            let body = dom.append_child(dom.root(), body);
            (dom, body)
        } else {
            let dom = Dom::fragment();
            let root = dom.root();
            (dom, root)
        };

        Self {
            dom,
            insertion_point,
            block_state: BlockState::None,
            classifier: LineClassifier,
        }
    }

    /// Advances the state machine by one input line.
    ///
    /// The only failure is a heading inside an open block; everything else
    /// is absorbed per the transition table.
    pub fn process_line(&mut self, line: &str) -> Result<(), ParseError> {
        match self.classifier.classify(line, self.block_state) {
            LineKind::Heading { level, title } => self.handle_heading(level, title)?,
            LineKind::UnorderedListItem { text } => self.handle_list_item("ul", text, BlockState::UnorderedList),
            LineKind::OrderedListItem { text } => self.handle_list_item("ol", text, BlockState::OrderedList),
            LineKind::CodeFence => self.handle_fence(),
            LineKind::TableRow { line, separator } => self.handle_table_row(line, separator),
            LineKind::Empty => self.close_open_block(),
            LineKind::Other => self.handle_other(line),
        }
        Ok(())
    }

    /// Consumes the builder, returning the finished tree.
    pub fn finish(self) -> Dom {
        self.dom
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn root(&self) -> NodeId {
        self.dom.root()
    }

    /// Ascends out of whatever block is open and resets the state.
    /// No-op when already at the root.
    fn close_open_block(&mut self) {
        if self.block_state == BlockState::None {
            return;
        }
        if let Some(parent) = self.dom.parent_of(self.insertion_point) {
            self.insertion_point = parent;
        }
        self.block_state = BlockState::None;
    }

    fn handle_heading(&mut self, level: usize, title: &str) -> Result<(), ParseError> {
        if self.block_state != BlockState::None {
            return Err(ParseError::HeadingInOpenBlock(self.block_state.describe()));
        }
        let tag = format!("h{level}");
        let heading = self.dom.create_element(&tag);
        let text = self.dom.create_text(title);
        self.dom.append_child(heading, text);
        self.dom.append_child(self.insertion_point, heading);
        Ok(())
    }

    fn handle_list_item(&mut self, list_tag: &str, text: &str, list_state: BlockState) {
        if self.block_state != list_state {
            self.close_open_block();
            let list = self.dom.create_element(list_tag);
            self.insertion_point = self.dom.append_child(self.insertion_point, list);
            self.block_state = list_state;
        }
        let li = self.dom.create_element("li");
        render_inline(&mut self.dom, text, li);
        self.dom.append_child(self.insertion_point, li);
    }

    fn handle_fence(&mut self) {
        if self.block_state == BlockState::CodeBlock {
            self.close_open_block();
            return;
        }
        self.close_open_block();
        let div = self.dom.create_element("div");
        self.dom.set_attribute(div, "class", "code");
        self.insertion_point = self.dom.append_child(self.insertion_point, div);
        self.block_state = BlockState::CodeBlock;
    }

    fn handle_table_row(&mut self, line: &str, separator: bool) {
        // Header-separator rows are consumed silently and never open a table.
        if separator {
            return;
        }

        let cell_tag = if self.block_state == BlockState::Table {
            "td"
        } else {
            self.close_open_block();
            let table = self.dom.create_element("table");
            self.insertion_point = self.dom.append_child(self.insertion_point, table);
            self.block_state = BlockState::Table;
            "th"
        };

        let tr = self.dom.create_element("tr");
        for cell in TableRow::cells(line) {
            let node = self.dom.create_element(cell_tag);
            render_inline(&mut self.dom, cell, node);
            self.dom.append_child(tr, node);
        }
        self.dom.append_child(self.insertion_point, tr);
    }

    fn handle_other(&mut self, line: &str) {
        match self.block_state {
            BlockState::CodeBlock => {
                let content = CodeFence::escape_content(line);
                let text = self.dom.create_text(&content);
                self.dom.append_child(self.insertion_point, text);
                let br = self.dom.create_element("br");
                self.dom.mark_void(br);
                self.dom.append_child(self.insertion_point, br);
            }
            BlockState::Paragraph => {
                // Consecutive prose lines merge into the open paragraph,
                // separated by a line break.
                let br = self.dom.create_element("br");
                self.dom.mark_void(br);
                self.dom.append_child(self.insertion_point, br);
                render_inline(&mut self.dom, line, self.insertion_point);
            }
            _ => {
                self.close_open_block();
                let p = self.dom.create_element("p");
                render_inline(&mut self.dom, line, p);
                self.insertion_point = self.dom.append_child(self.insertion_point, p);
                self.block_state = BlockState::Paragraph;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeKind;
    use crate::render::to_html;

    fn build(lines: &[&str]) -> Dom {
        let mut builder = DocumentBuilder::new(false);
        for line in lines {
            builder.process_line(line).unwrap();
        }
        builder.finish()
    }

    fn top_tags(dom: &Dom) -> Vec<String> {
        dom.node(dom.root())
            .children
            .iter()
            .map(|&id| match &dom.node(id).kind {
                NodeKind::Element(data) => data.tag.clone(),
                NodeKind::Text(_) => "text".to_string(),
            })
            .collect()
    }

    #[test]
    fn heading_leaves_state_untouched() {
        let dom = build(&["# One", "## Two"]);
        assert_eq!(top_tags(&dom), vec!["h1", "h2"]);
    }

    #[test]
    fn heading_inside_open_list_aborts() {
        let mut builder = DocumentBuilder::new(false);
        builder.process_line("- item").unwrap();
        assert_eq!(
            builder.process_line("# nope"),
            Err(ParseError::HeadingInOpenBlock("unordered list"))
        );
    }

    #[test]
    fn consecutive_items_share_one_list() {
        let dom = build(&["- a", "- b", "- c"]);
        assert_eq!(top_tags(&dom), vec!["ul"]);
        let ul = dom.node(dom.root()).children[0];
        assert_eq!(dom.node(ul).children.len(), 3);
    }

    #[test]
    fn empty_line_closes_the_list() {
        let dom = build(&["- a", "", "- b"]);
        assert_eq!(top_tags(&dom), vec!["ul", "ul"]);
    }

    #[test]
    fn prose_after_list_opens_a_paragraph() {
        let dom = build(&["- a", "then prose"]);
        assert_eq!(top_tags(&dom), vec!["ul", "p"]);
    }

    #[test]
    fn switching_list_kind_closes_the_first_list() {
        let dom = build(&["- a", "1. b"]);
        assert_eq!(top_tags(&dom), vec!["ul", "ol"]);
    }

    #[test]
    fn empty_line_at_root_is_a_no_op() {
        let dom = build(&["", ""]);
        assert!(dom.node(dom.root()).children.is_empty());
    }

    #[test]
    fn separator_row_produces_no_cells() {
        let dom = build(&["|A|B|", "|---|---|", "|1|2|"]);
        assert_eq!(top_tags(&dom), vec!["table"]);
        let table = dom.node(dom.root()).children[0];
        assert_eq!(dom.node(table).children.len(), 2);
    }

    #[test]
    fn leading_separator_row_never_opens_a_table() {
        let dom = build(&["|---|---|"]);
        assert!(dom.node(dom.root()).children.is_empty());
    }

    #[test]
    fn code_block_content_is_verbatim() {
        let dom = build(&["```", "- not a list", "```"]);
        assert_eq!(top_tags(&dom), vec!["div"]);
        let div = dom.node(dom.root()).children[0];
        let children = &dom.node(div).children;
        assert_eq!(children.len(), 2);
        assert!(matches!(
            &dom.node(children[0]).kind,
            NodeKind::Text(s) if s == "-&nbsp;not&nbsp;a&nbsp;list"
        ));
    }

    // Open interpretation: the reference behavior for a second prose line
    // in an open paragraph is ambiguous; this codifies the merge-with-<br>
    // reading.
    #[test]
    fn consecutive_prose_lines_merge_into_one_paragraph() {
        let dom = build(&["first", "second"]);
        assert_eq!(top_tags(&dom), vec!["p"]);
        assert_eq!(to_html(&dom), "<p>first<br>second</p>\n");
    }

    #[test]
    fn full_page_mode_wraps_in_html_skeleton() {
        let mut builder = DocumentBuilder::new(true);
        builder.process_line("hello").unwrap();
        let dom = builder.finish();
        assert_eq!(
            to_html(&dom),
            "<html><head></head>\n<body><p>hello</p>\n</body>\n</html>\n"
        );
    }
}
