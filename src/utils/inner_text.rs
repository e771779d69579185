use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

// Elements whose text never reaches the reader
const HIDDEN: &[&str] = &["head", "noscript", "script", "style", "template", "title"];

// Elements that start on their own line when rendered
const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary",
    "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Plain text of an element roughly as a browser renders it: tags stripped,
/// hidden elements dropped, block boundaries and `<br>` breaking words, and
/// whitespace collapsed to single spaces. Inline CSS such as `display:none`
/// is not evaluated.
pub fn inner_text(element: ElementRef<'_>) -> String{
    let mut raw = String::new();
    collect_text(*element, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String){
    for child in node.children(){
        match child.value(){
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                let name = element.name();
                if HIDDEN.contains(&name) || element.attr("hidden").is_some(){
                    continue;
                }
                if name == "br"{
                    out.push('\n');
                    continue;
                }
                let block = BLOCK.contains(&name);
                if block{
                    out.push('\n');
                }
                collect_text(child, out);
                if block{
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}
