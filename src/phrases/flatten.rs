use super::node::Node;

/// PURE FUNCTION: Collapses nested mappings into their values, in order.
/// Lists and scalars are terminal and come back as a single element.
pub fn flatten(node: &Node) -> Vec<Node> {
    let mut out = Vec::new();
    flatten_into(node, &mut out);
    out
}

fn flatten_into(node: &Node, out: &mut Vec<Node>) {
    match node {
        Node::Mapping(entries) => {
            for (_, value) in entries {
                flatten_into(value, out);
            }
        }
        Node::Scalar(_) | Node::List(_) => out.push(node.clone()),
    }
}
