use super::ast::{PathSet, Segment, SlashPath};
use super::parser::Parser;
use super::truthiness::Truthiness;
use serde_json::Value;

/// Where a traversal currently stands in the document.
///
/// `List` holds the elements produced by distributing over an array. The
/// elements borrow from the document; only the list itself is new.
#[derive(Debug, Clone, PartialEq)]
pub enum Position<'a> {
    Node(&'a Value),
    List(Vec<&'a Value>),
}

impl<'a> Position<'a> {
    fn is_null(&self) -> bool {
        matches!(self, Position::Node(Value::Null))
    }

    /// Returns the elements at this position if it is array-shaped,
    /// otherwise hands the position back.
    fn elements(self) -> Result<Vec<&'a Value>, Self> {
        match self {
            Position::Node(Value::Array(items)) => Ok(items.iter().collect()),
            Position::List(items) => Ok(items),
            other => Err(other),
        }
    }

    /// Copies the position out as an owned value.
    pub fn to_value(&self) -> Value {
        match self {
            Position::Node(node) => (*node).clone(),
            Position::List(items) => Value::Array(items.iter().map(|v| (*v).clone()).collect()),
        }
    }
}

/// The values found for a path set.
///
/// A single hit is reported bare; two or more keep their path order.
/// Finding nothing at all is `None` at the call site, never an empty `Many`.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Single(Value),
    Many(Vec<Value>),
}

impl Extraction {
    /// Collapses the extraction into a plain JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Extraction::Single(value) => value,
            Extraction::Many(values) => Value::Array(values),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Extraction::Single(_) => 1,
            Extraction::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Looks `key` up on a single value.
///
/// Objects resolve by field name and arrays by canonical decimal index.
/// Scalars and `null` have no fields.
fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .filter(|idx| idx.to_string() == key)
            .and_then(|idx| items.get(idx)),
        _ => None,
    }
}

pub struct Evaluator<'a> {
    root: &'a Value,
    truthiness: Truthiness,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator::with_truthiness(root, Truthiness::default())
    }

    pub fn with_truthiness(root: &'a Value, truthiness: Truthiness) -> Self {
        Evaluator { root, truthiness }
    }

    pub fn truthiness(&self) -> Truthiness {
        self.truthiness
    }

    /// Evaluates a path set and applies the unwrap rule.
    ///
    /// Paths that are empty or reach nothing are skipped. Zero hits give
    /// `None`, one hit gives `Extraction::Single`, more give
    /// `Extraction::Many` in the order the paths were supplied.
    pub fn extract(&self, paths: impl Into<PathSet>) -> Option<Extraction> {
        let paths = paths.into();
        let mut results: Vec<Value> = paths
            .iter()
            .filter_map(Parser::parse)
            .filter_map(|path| self.extract_path(&path))
            .collect();

        match results.len() {
            0 => None,
            1 => results.pop().map(Extraction::Single),
            _ => Some(Extraction::Many(results)),
        }
    }

    /// Evaluates one parsed path.
    ///
    /// When the prefix lands on an array the accessor is read from every
    /// element and empty results are dropped, without flattening. The result
    /// is then an array even if it ends up empty.
    pub fn extract_path(&self, path: &SlashPath) -> Option<Value> {
        let position = self.traverse(&path.prefix)?;
        if position.is_null() {
            return None;
        }

        match position.elements() {
            Ok(items) => Some(Value::Array(
                items
                    .into_iter()
                    .filter_map(|item| lookup(item, &path.accessor))
                    .filter(|found| self.truthiness.keeps(found))
                    .cloned()
                    .collect(),
            )),
            Err(Position::Node(node)) => lookup(node, &path.accessor).cloned(),
            Err(Position::List(_)) => None,
        }
    }

    /// Follows the traversal prefix from the root.
    ///
    /// Returns `None` when the walk falls off the document. A `null` reached
    /// along the way stops the walk and is returned as-is.
    pub fn traverse(&self, prefix: &[Segment]) -> Option<Position<'a>> {
        let mut current = Position::Node(self.root);

        for segment in prefix {
            if current.is_null() {
                return Some(current);
            }

            current = match segment {
                Segment::Wildcard => match current.elements() {
                    Ok(items) => Position::List(self.keep_and_flatten(items.into_iter())),
                    Err(_) => return None,
                },
                Segment::Key(key) => match current.elements() {
                    Ok(items) => Position::List(
                        self.keep_and_flatten(items.into_iter().filter_map(|item| lookup(item, key))),
                    ),
                    Err(Position::Node(node)) => Position::Node(lookup(node, key)?),
                    Err(Position::List(_)) => return None,
                },
            };
        }

        Some(current)
    }

    /// Drops empty values and splices array values in one level deep.
    fn keep_and_flatten(&self, found: impl Iterator<Item = &'a Value>) -> Vec<&'a Value> {
        let mut flattened = Vec::new();
        for value in found.filter(|v| self.truthiness.keeps(v)) {
            match value {
                Value::Array(inner) => flattened.extend(inner.iter()),
                other => flattened.push(other),
            }
        }
        flattened
    }
}

/// Extracts values from `document` with the default truthiness.
pub fn extract(document: &Value, paths: impl Into<PathSet>) -> Option<Extraction> {
    Evaluator::new(document).extract(paths)
}
