//! Line-oriented parsing of the node and bird dataset files.
//!
//! Both files are plain comma-separated text:
//!
//! - nodes: `id,parent_id` with an empty `parent_id` for roots
//! - birds: `id,node_id,name`
//!
//! A header line (first line whose id column is not numeric) is tolerated and
//! skipped, so exports with or without headers both load.

use crate::domain::entities::{Bird, NodeId};
use crate::domain::error::{DomainError, DomainResult};

/// A parsed node row, before insertion into a forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRow {
    pub id: NodeId,
    pub parent_id: Option<NodeId>,
}

/// Parse node rows from file content.
pub fn parse_nodes(content: &str) -> DomainResult<Vec<NodeRow>> {
    let mut rows = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.splitn(2, ',');
        let id_field = fields.next().unwrap_or("").trim();
        let parent_field = fields.next().unwrap_or("").trim();

        let id = match id_field.parse::<NodeId>() {
            Ok(id) => id,
            // Header line
            Err(_) if idx == 0 => continue,
            Err(_) => {
                return Err(DomainError::InvalidRecord {
                    line: line_no,
                    reason: format!("invalid node id: {id_field:?}"),
                })
            }
        };

        let parent_id = if parent_field.is_empty() {
            None
        } else {
            Some(parent_field.parse::<NodeId>().map_err(|_| {
                DomainError::InvalidRecord {
                    line: line_no,
                    reason: format!("invalid parent id: {parent_field:?}"),
                }
            })?)
        };

        rows.push(NodeRow { id, parent_id });
    }

    Ok(rows)
}

/// Parse bird rows from file content.
///
/// The name column is taken verbatim after the second comma, so names may
/// contain commas.
pub fn parse_birds(content: &str) -> DomainResult<Vec<Bird>> {
    let mut birds = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.splitn(3, ',');
        let id_field = fields.next().unwrap_or("").trim();
        let node_field = fields.next().unwrap_or("").trim();
        let name = fields.next().unwrap_or("").trim();

        let id = match id_field.parse() {
            Ok(id) => id,
            Err(_) if idx == 0 => continue,
            Err(_) => {
                return Err(DomainError::InvalidRecord {
                    line: line_no,
                    reason: format!("invalid bird id: {id_field:?}"),
                })
            }
        };

        let node_id = node_field
            .parse()
            .map_err(|_| DomainError::InvalidRecord {
                line: line_no,
                reason: format!("invalid node id: {node_field:?}"),
            })?;

        if name.is_empty() {
            return Err(DomainError::InvalidRecord {
                line: line_no,
                reason: "missing bird name".to_string(),
            });
        }

        birds.push(Bird {
            id,
            node_id,
            name: name.to_string(),
        });
    }

    Ok(birds)
}
