use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ego_tree::NodeId;
use html5ever::tendril::StrTendril;
use log::debug;
use scraper::node::Text;
use scraper::{Html, Node, Selector};

use crate::annotator::initialize;
use crate::error::PageError;
use crate::types::{Card, Markers};
use crate::utils::inner_text;

pub struct CardSelectors{
    card: Selector,
    content: Selector,
    display: Selector,
}

impl CardSelectors{
    pub fn compile(markers: &Markers) -> Result<CardSelectors, PageError>{
        Ok(CardSelectors{
            card: parse_selector(&markers.card)?,
            content: parse_selector(&markers.content)?,
            display: parse_selector(&markers.display)?,
        })
    }
}

fn parse_selector(raw: &str) -> Result<Selector, PageError>{
    Selector::parse(raw).map_err(|e| PageError::InvalidSelector{
        selector: raw.to_string(),
        reason: format!("{:?}", e),
    })
}

// a card plus where its label goes back in the tree
struct Located{
    card: Card,
    display_node: Option<NodeId>,
}

pub struct Page{
    html: Html,
}

impl Page{
    pub fn parse(source: &str) -> Page{
        Page{ html: Html::parse_document(source) }
    }

    fn locate_cards(&self, selectors: &CardSelectors) -> Vec<Located>{
        self.html
            .select(&selectors.card)
            .map(|card| {
                let content = card.select(&selectors.content).next().map(inner_text);
                let display = card.select(&selectors.display).next();
                Located{
                    card: Card{
                        content,
                        display: display.map(|node| node.text().collect::<String>()),
                    },
                    display_node: display.map(|node| node.id()),
                }
            })
            .collect()
    }

    // returns how many labels were written
    pub fn annotate(&mut self, selectors: &CardSelectors) -> usize{
        let (mut cards, display_nodes): (Vec<Card>, Vec<Option<NodeId>>) = self
            .locate_cards(selectors)
            .into_iter()
            .map(|located| (located.card, located.display_node))
            .unzip();

        let written = initialize(&mut cards);

        for (card, display_node) in cards.iter().zip(display_nodes){
            // cards without content were skipped, their display keeps its markup
            if card.content.is_none(){
                continue;
            }
            if let (Some(label), Some(node)) = (&card.display, display_node){
                self.replace_text(node, label);
            }
        }
        written
    }

    fn replace_text(&mut self, id: NodeId, text: &str){
        let children: Vec<NodeId> = match self.html.tree.get(id){
            Some(node) => node.children().map(|child| child.id()).collect(),
            None => return,
        };
        for child in children{
            if let Some(mut child) = self.html.tree.get_mut(child){
                child.detach();
            }
        }
        if let Some(mut node) = self.html.tree.get_mut(id){
            node.append(Node::Text(Text{ text: StrTendril::from_slice(text) }));
        }
    }

    pub fn html(&self) -> String{
        self.html.html()
    }
}

pub fn annotate_html(source: &str, selectors: &CardSelectors) -> String{
    let mut page = Page::parse(source);
    let written = page.annotate(selectors);
    debug!("wrote {} reading time labels", written);
    page.html()
}

// plain file names only, nothing that can leave `dir`
pub fn read_page(dir: &Path, name: &str) -> Result<String, PageError>{
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']){
        return Err(PageError::InvalidName(name.to_string()));
    }
    fs::read_to_string(dir.join(name)).map_err(|e| match e.kind(){
        ErrorKind::NotFound => PageError::NotFound(name.to_string()),
        _ => PageError::Io(e),
    })
}
