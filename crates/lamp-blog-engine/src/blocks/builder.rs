use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, ListKind, Quote},
    types::{BlockMetadata, BlockType, ContentBlock},
};

/// The block currently being accumulated across lines.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Quote { lines: Vec<String> },
    List { kind: ListKind, items: Vec<String> },
    Fence { tag: String, lines: Vec<String> },
}

/// Phase 2 of block parsing: a state machine fed one classified line at a
/// time.
///
/// At most one leaf is open. Headings, images, videos and separators never
/// stay open; they are emitted as soon as their line is seen. An image or
/// video leaves a one-line window in which a caption line attaches to it.
pub struct BlockBuilder {
    leaf: LeafState,
    /// Index into `out` of the media block waiting for a caption line.
    caption_target: Option<usize>,
    out: Vec<ContentBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            caption_target: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if let Some(target) = self.caption_target.take()
            && let Some(caption) = &c.caption
        {
            self.out[target].metadata.caption = Some(caption.clone());
            return;
        }

        match &c.kind {
            LineKind::Heading { level, text } => {
                self.flush_leaf();
                self.emit(ContentBlock::new(
                    BlockType::Heading,
                    text.as_str(),
                    BlockMetadata {
                        level: Some(*level),
                        ..Default::default()
                    },
                ));
            }
            LineKind::FenceOpen { tag } => {
                self.flush_leaf();
                self.leaf = LeafState::Fence {
                    tag: tag.clone(),
                    lines: vec![],
                };
            }
            LineKind::Image { alt, url } => {
                self.flush_leaf();
                self.emit(ContentBlock::new(
                    BlockType::Image,
                    url.as_str(),
                    BlockMetadata {
                        alt: Some(alt.clone()),
                        caption: Some(String::new()),
                        ..Default::default()
                    },
                ));
                self.caption_target = Some(self.out.len() - 1);
            }
            LineKind::Video { url } => {
                self.flush_leaf();
                self.emit(ContentBlock::new(
                    BlockType::Video,
                    url.as_str(),
                    BlockMetadata {
                        caption: Some(String::new()),
                        ..Default::default()
                    },
                ));
                self.caption_target = Some(self.out.len() - 1);
            }
            LineKind::ListItem { kind, text } => self.extend_list(*kind, text),
            LineKind::Quote { text } => self.extend_quote(text),
            LineKind::Separator => {
                self.flush_leaf();
                self.emit(ContentBlock::new(
                    BlockType::Separator,
                    "",
                    BlockMetadata::default(),
                ));
            }
            LineKind::Blank => {
                // Lists survive blank lines; they only close on a non-list line.
                if !matches!(self.leaf, LeafState::List { .. }) {
                    self.flush_leaf();
                }
            }
            LineKind::Text => self.extend_paragraph(&c.text),
        }
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush, including an unterminated fence
        self.flush_leaf();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit(&mut self, block: ContentBlock) {
        self.out.push(block);
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        if c.is_fence_marker {
            self.flush_leaf();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.text.clone());
        }
    }

    fn extend_list(&mut self, kind: ListKind, text: &str) {
        match &mut self.leaf {
            LeafState::List { kind: open, items } if *open == kind => {
                items.push(text.to_string());
            }
            _ => {
                self.flush_leaf();
                self.leaf = LeafState::List {
                    kind,
                    items: vec![text.to_string()],
                };
            }
        }
    }

    fn extend_quote(&mut self, text: &str) {
        match &mut self.leaf {
            LeafState::Quote { lines } => lines.push(text.to_string()),
            _ => {
                self.flush_leaf();
                self.leaf = LeafState::Quote {
                    lines: vec![text.to_string()],
                };
            }
        }
    }

    fn extend_paragraph(&mut self, line: &str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(line.to_string()),
            _ => {
                self.flush_leaf();
                self.leaf = LeafState::Paragraph {
                    lines: vec![line.to_string()],
                };
            }
        }
    }

    fn flush_leaf(&mut self) {
        let block = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph { lines } => {
                ContentBlock::new(BlockType::Paragraph, lines.join("\n"), BlockMetadata::default())
            }
            LeafState::Quote { lines } => {
                let (text, author) = Quote::split_author(&lines.join("\n"));
                ContentBlock::new(
                    BlockType::Quote,
                    text,
                    BlockMetadata {
                        author,
                        ..Default::default()
                    },
                )
            }
            LeafState::List { kind, items } => ContentBlock::new(
                kind.block_type(),
                "",
                BlockMetadata {
                    items: Some(items),
                    ..Default::default()
                },
            ),
            LeafState::Fence { tag, lines } => {
                let (language, filename) = CodeFence::split_tag(&tag);
                ContentBlock::new(
                    BlockType::Code,
                    lines.join("\n"),
                    BlockMetadata {
                        language: Some(language.to_string()),
                        filename: Some(filename.to_string()),
                        ..Default::default()
                    },
                )
            }
        };
        self.emit(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
