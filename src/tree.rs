/// A node of a structure tree: either a directory holding further entries or a
/// file holding its literal contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Directory(&'static [Entry]),
    File(&'static str),
}
/// A named [`Node`]. The name is a single path segment relative to the
/// directory the entry is materialized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    pub node: Node,
}
impl Entry {
    pub fn is_dir(&self) -> bool {
        matches!(self.node, Node::Directory(_))
    }
}

pub const fn dir(name: &'static str, children: &'static [Entry]) -> Entry {
    Entry {
        name,
        node: Node::Directory(children),
    }
}

pub const fn file(name: &'static str, contents: &'static str) -> Entry {
    Entry {
        name,
        node: Node::File(contents),
    }
}

/// Visits every entry of `entries` depth first, handing the callback the path
/// of the entry relative to the tree root.
pub fn walk<F>(entries: &[Entry], f: &mut F)
where
    F: FnMut(&std::path::Path, &Entry),
{
    fn inner<F>(prefix: &std::path::Path, entries: &[Entry], f: &mut F)
    where
        F: FnMut(&std::path::Path, &Entry),
    {
        for entry in entries {
            let path = prefix.join(entry.name);

            f(&path, entry);

            if let Node::Directory(children) = entry.node {
                inner(&path, children, f);
            }
        }
    }

    inner(std::path::Path::new(""), entries, f);
}
