//! Graph view of the state machine for visualization
//!
//! Edges are discovered by probing `transition` with one representative
//! event per outcome, so the diagram cannot drift from the real routing.

use super::{transition, Event, MenuRoute, Node, MAX_CRITIC_REVIEWS};
use std::collections::BTreeSet;
use std::fmt::Write;

/// A labelled edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    /// Condition label; `None` for unconditional edges
    pub label: Option<&'static str>,
}

fn probes() -> Vec<(Event, Option<&'static str>)> {
    let mut probes: Vec<_> = MenuRoute::ALL
        .iter()
        .map(|r| (Event::MenuSelected(*r), Some(r.name())))
        .collect();
    probes.extend([
        (Event::MenuInvalid, Some("invalid")),
        (Event::SettingsApplied, None),
        (Event::JokeDrafted, None),
        (
            Event::JokeReviewed {
                approved: true,
                retry_count: 1,
            },
            Some("approved"),
        ),
        (
            Event::JokeReviewed {
                approved: false,
                retry_count: 1,
            },
            Some("rejected"),
        ),
        (
            Event::JokeReviewed {
                approved: false,
                retry_count: MAX_CRITIC_REVIEWS,
            },
            Some("retries exhausted"),
        ),
        (Event::JokeShown, None),
        (Event::Exited, None),
    ]);
    probes
}

/// All edges of the graph, sorted and deduplicated
pub fn edges() -> Vec<Edge> {
    let probes = probes();
    let mut edges = BTreeSet::new();
    for from in Node::ALL {
        for (event, label) in &probes {
            if let Ok(to) = transition(from, *event) {
                edges.insert(Edge {
                    from,
                    to,
                    label: *label,
                });
            }
        }
    }
    edges.into_iter().collect()
}

/// Render the graph as a Mermaid flowchart
pub fn to_mermaid() -> String {
    let mut diagram = String::from("flowchart TD\n");
    let _ = writeln!(diagram, "    Start([Start]) --> {}", Node::ShowMenu.name());

    for node in Node::ALL.iter().filter(|n| !n.is_terminal()) {
        let _ = writeln!(diagram, "    {0}[{0}]", node.name());
    }
    diagram.push_str("    End([End])\n");

    for edge in edges() {
        let target = if edge.to.is_terminal() {
            "End"
        } else {
            edge.to.name()
        };
        match edge.label {
            Some(label) => {
                let _ = writeln!(diagram, "    {} -->|{label}| {target}", edge.from.name());
            }
            None => {
                let _ = writeln!(diagram, "    {} --> {target}", edge.from.name());
            }
        }
    }

    diagram.push_str("\n    %% Styling\n");
    diagram.push_str("    classDef startEnd fill:#e1f5e1,stroke:#4caf50,stroke-width:3px\n");
    diagram.push_str("    classDef cycle fill:#fff3e0,stroke:#fb8c00,stroke-width:2px\n");
    diagram.push_str("    class Start,End startEnd\n");
    let cycle: Vec<_> = Node::ALL
        .iter()
        .filter(|n| n.in_cycle())
        .map(|n| n.name())
        .collect();
    let _ = writeln!(diagram, "    class {} cycle", cycle.join(","));

    diagram
}

/// Wrap a Mermaid diagram in a standalone HTML page
pub fn to_html(mermaid: &str) -> String {
    format!(
        r#"<html>
<head>
  <script src="https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js"></script>
  <script>mermaid.initialize({{startOnLoad:true}});</script>
</head>
<body>
  <div class="mermaid">
{mermaid}
  </div>
</body>
</html>
"#
    )
}
