//! Request-body parsing
//!
//! Turns a raw request buffer into a forest of [`Element`] nodes. The
//! protocol allows several sibling nodes at the top level of a request
//! document (prologue aside), and the dispatcher scans exactly that
//! level for operation tags, so the parser returns `Vec<Element>` rather
//! than insisting on a single root.

use crate::element::Element;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Errors produced while decoding a request body.
///
/// The rendered message becomes the text of a `ServiceException`, so it
/// must always be non-empty and self-describing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no XML element found in request document")]
    EmptyDocument,

    #[error("malformed XML near byte {offset}: {message}")]
    Malformed { offset: usize, message: String },
}

/// Parse a raw request body into an ordered forest of elements.
///
/// Comments, processing instructions, the XML declaration, and DOCTYPE
/// nodes are skipped. Text content is entity-unescaped and trimmed.
/// Input that is not valid UTF-8 is decoded lossily; the identifier
/// fields the dispatcher cares about are plain ASCII.
///
/// # Errors
///
/// Returns [`ParseError::EmptyDocument`] when no element is present at
/// all, and [`ParseError::Malformed`] with the underlying parser
/// diagnostic for any syntax error. Never panics on arbitrary input.
pub fn parse_document(input: &[u8]) -> Result<Vec<Element>, ParseError> {
    let text = String::from_utf8_lossy(input);
    let mut reader = Reader::from_str(&text);

    let mut forest: Vec<Element> = Vec::new();
    let mut open: Vec<Element> = Vec::new();

    loop {
        let offset = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let element = element_from_start(&start, offset)?;
                open.push(element);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start, offset)?;
                attach(&mut forest, &mut open, element);
            }
            Ok(Event::End(end)) => match open.pop() {
                Some(element) => attach(&mut forest, &mut open, element),
                None => {
                    return Err(ParseError::Malformed {
                        offset,
                        message: format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(end.name().as_ref())
                        ),
                    })
                }
            },
            Ok(Event::Text(content)) => {
                let unescaped = content.unescape().map_err(|e| ParseError::Malformed {
                    offset,
                    message: e.to_string(),
                })?;
                if let Some(element) = open.last_mut() {
                    element.push_text(unescaped.trim());
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some(element) = open.last_mut() {
                    let raw = cdata.into_inner();
                    element.push_text(String::from_utf8_lossy(&raw).trim());
                }
            }
            Ok(Event::Eof) => {
                if let Some(unclosed) = open.last() {
                    return Err(ParseError::Malformed {
                        offset,
                        message: format!(
                            "unexpected end of document inside <{}>",
                            unclosed.name()
                        ),
                    });
                }
                break;
            }
            // Declaration, DOCTYPE, comments, processing instructions.
            Ok(_) => {}
            Err(e) => {
                return Err(ParseError::Malformed {
                    offset,
                    message: e.to_string(),
                })
            }
        }
    }

    if forest.is_empty() {
        return Err(ParseError::EmptyDocument);
    }
    Ok(forest)
}

fn element_from_start(start: &BytesStart<'_>, offset: usize) -> Result<Element, ParseError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| ParseError::Malformed {
            offset,
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| ParseError::Malformed {
                offset,
                message: e.to_string(),
            })?
            .into_owned();
        element = element.with_attr(key, value);
    }

    Ok(element)
}

fn attach(forest: &mut Vec<Element>, open: &mut [Element], element: Element) {
    match open.last_mut() {
        Some(parent) => parent.push_child(element),
        None => forest.push(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_operation_document() {
        let forest = parse_document(b"<GetCapabilities service=\"WCTS\"/>").unwrap();
        assert_eq!(forest.len(), 1);
        assert!(forest[0].is_named("GetCapabilities"));
        assert_eq!(forest[0].attr("service"), Some("WCTS"));
    }

    #[test]
    fn test_forest_of_top_level_siblings() {
        let forest = parse_document(b"<Foo/><Transformable><SourceCRS/></Transformable>").unwrap();
        assert_eq!(forest.len(), 2);
        assert!(forest[0].is_named("Foo"));
        assert!(forest[1].is_named("Transformable"));
        assert_eq!(forest[1].children().len(), 1);
    }

    #[test]
    fn test_prologue_is_skipped() {
        let forest = parse_document(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- request -->\n<Transform/>",
        )
        .unwrap();
        assert_eq!(forest.len(), 1);
        assert!(forest[0].is_named("Transform"));
    }

    #[test]
    fn test_nested_text_is_unescaped_and_trimmed() {
        let forest = parse_document(
            b"<CoordinateReferenceSystem><Identifier><codeSpace> EPSG </codeSpace>\
              <code>4326</code></Identifier></CoordinateReferenceSystem>",
        )
        .unwrap();
        assert_eq!(forest[0].value("Identifier.codeSpace"), Some("EPSG"));
        assert_eq!(forest[0].value("Identifier.code"), Some("4326"));
    }

    #[test]
    fn test_malformed_document_yields_diagnostic() {
        let err = parse_document(b"<Transformable><SourceCRS></Transformable>").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_unclosed_element_is_rejected() {
        let err = parse_document(b"<Transformable>").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_stray_closing_tag_is_rejected() {
        let err = parse_document(b"</Transformable>").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(parse_document(b"").unwrap_err(), ParseError::EmptyDocument);
        assert_eq!(
            parse_document(b"   \n ").unwrap_err(),
            ParseError::EmptyDocument
        );
    }
}
