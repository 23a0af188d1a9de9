use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub checked: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
        }
    }
}

/// Ordered set of selectable items for one run.
///
/// Order is fixed when the catalog is built (case-insensitive by name, stable
/// for equal keys) and never changes afterwards; only checked flags mutate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from candidate names.
    ///
    /// Names that could not survive a trip through the selection file are
    /// dropped: empty names, names with leading or trailing whitespace, and
    /// names containing a line break. When a name repeats, the first
    /// occurrence wins and later ones are discarded.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for name in names {
            let name = name.into();
            if !is_persistable(&name) || !seen.insert(name.clone()) {
                continue;
            }
            items.push(Item::new(name));
        }

        items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|it| it.name == name)
    }

    /// Flips the checked flag at `index`. Returns the new value, or `None`
    /// when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Marks the item named `name` as checked. Returns false if no such item.
    pub fn set_checked(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.items[idx].checked = true;
                true
            }
            None => false,
        }
    }

    pub fn checked_names(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|it| it.checked)
            .map(|it| it.name.as_str())
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|it| it.checked).count()
    }
}

/// A selection file stores one trimmed name per line, so only names that
/// read back unchanged may enter the catalog.
fn is_persistable(name: &str) -> bool {
    !name.is_empty() && name.trim() == name && !name.contains(['\n', '\r'])
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
