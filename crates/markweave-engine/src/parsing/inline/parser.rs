use crate::dom::{Dom, NodeId};

use super::{
    kinds::{Bold, Image, Italic, Link},
    types::InlineMatch,
};

/// Recursively renders `span` as children of `parent`.
///
/// Finds the leftmost-starting inline construct, emits the text before it,
/// the construct's element, then recurses on the text after it. With no
/// construct present the whole span becomes a single text leaf; empty
/// spans produce nothing. The effect is expressed entirely through tree
/// mutation.
///
/// Each recursive call operates on a strictly smaller span, so depth is
/// bounded by the number of constructs in the line.
pub fn render_inline(dom: &mut Dom, span: &str, parent: NodeId) {
    let m = match first_match(span) {
        Some(m) => m,
        None => {
            if !span.is_empty() {
                let text = dom.create_text(span);
                dom.append_child(parent, text);
            }
            return;
        }
    };

    render_inline(dom, &span[..m.start()], parent);

    match &m {
        InlineMatch::Bold { inner, .. } => {
            let b = dom.create_element("b");
            render_inline(dom, &span[inner.clone()], b);
            dom.append_child(parent, b);
        }
        InlineMatch::Italic { inner, .. } => {
            let i = dom.create_element("i");
            render_inline(dom, &span[inner.clone()], i);
            dom.append_child(parent, i);
        }
        InlineMatch::Image { alt, src, .. } => {
            let img = dom.create_element("img");
            dom.set_attribute(img, "alt", &span[alt.clone()]);
            dom.set_attribute(img, "src", &span[src.clone()]);
            dom.mark_void(img);
            dom.append_child(parent, img);
        }
        InlineMatch::Link { label, href, .. } => {
            let a = dom.create_element("a");
            dom.set_attribute(a, "href", &span[href.clone()]);
            render_inline(dom, &span[label.clone()], a);
            dom.append_child(parent, a);
        }
    }

    render_inline(dom, &span[m.end()..], parent);
}

/// Selects the leftmost-starting construct; on equal starts the priority
/// order is bold, italic, image, link.
fn first_match(s: &str) -> Option<InlineMatch> {
    let mut best: Option<InlineMatch> = None;
    for candidate in [Bold::find(s), Italic::find(s), Image::find(s), Link::find(s)] {
        let Some(c) = candidate else { continue };
        match &best {
            Some(b) if c.start() >= b.start() => {}
            _ => best = Some(c),
        }
    }
    best
}
