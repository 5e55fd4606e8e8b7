//! Depth-first traversal of a document tree into a [`FlatMap`].

use super::document::Node;
use super::flat_map::FlatMap;
use super::format::format_scalar;
use super::options::ParserOptions;
use super::path::PathComposer;
use crate::error::ParseError;
use std::borrow::Cow;

/// One unit of pending work.
enum Step<'a> {
    Visit(&'a Node),
    Enter(Cow<'a, str>),
    Exit,
}

/// Flatten `root` into a fresh map.
///
/// The traversal is pre-order and follows document order exactly. It runs on
/// an explicit worklist, so nesting depth is bounded by
/// [`ParserOptions::max_depth`] rather than by the call stack.
///
/// # Errors
///
/// - [`ParseError::DuplicateKey`] when two leaves share a path, ignoring case
/// - [`ParseError::Format`] when nesting exceeds the configured depth
pub fn walk(root: &Node, options: &ParserOptions) -> Result<FlatMap, ParseError> {
    let mut map = FlatMap::new();
    let mut path = PathComposer::new();
    let mut pending = vec![Step::Visit(root)];

    while let Some(step) = pending.pop() {
        match step {
            Step::Enter(segment) => {
                path.push(segment);
                if path.depth() > options.max_depth {
                    return Err(ParseError::format(
                        format!(
                            "The maximum nesting depth of {} was exceeded",
                            options.max_depth
                        ),
                        path.current(),
                    ));
                }
            }
            Step::Exit => {
                path.pop();
            }
            // Children are pushed in reverse so they pop in document order
            Step::Visit(Node::Object(props)) => {
                for (name, child) in props.iter().rev() {
                    pending.push(Step::Exit);
                    pending.push(Step::Visit(child));
                    pending.push(Step::Enter(Cow::Borrowed(name)));
                }
            }
            Step::Visit(Node::Array(items)) => {
                for (index, child) in items.iter().enumerate().rev() {
                    pending.push(Step::Exit);
                    pending.push(Step::Visit(child));
                    pending.push(Step::Enter(Cow::Owned(index.to_string())));
                }
            }
            Step::Visit(Node::Scalar(scalar)) => {
                map.insert(path.current(), format_scalar(scalar, options.null_value))?;
            }
        }
    }

    debug_assert!(path.is_empty());
    Ok(map)
}
