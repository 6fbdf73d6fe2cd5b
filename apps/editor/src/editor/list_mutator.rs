//! Ordered-collection primitives shared by every list-shaped section.
//!
//! All functions are pure: they borrow the current list and return a new one.
//! Out-of-range indices never panic; they return an unchanged copy.
//! Only `append` and `remove_at` change the length, by exactly one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Index of the neighbour `index` would swap with, or `None` at the
    /// list boundary (no wrap-around) or when `index` is out of range.
    pub fn neighbor(self, index: usize, len: usize) -> Option<usize> {
        if index >= len {
            return None;
        }
        match self {
            Direction::Up => index.checked_sub(1),
            Direction::Down => (index + 1 < len).then_some(index + 1),
        }
    }
}

pub fn append<T: Clone>(list: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(item);
    next
}

pub fn remove_at<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    if index >= list.len() {
        return list.to_vec();
    }
    list.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Replaces the element at `index` wholesale.
pub fn update_at<T: Clone>(list: &[T], index: usize, item: T) -> Vec<T> {
    update_with(list, index, |_| item)
}

/// Replaces the element at `index` with `f(current)`. `f` is not called when
/// `index` is out of range.
pub fn update_with<T, F>(list: &[T], index: usize, f: F) -> Vec<T>
where
    T: Clone,
    F: FnOnce(&T) -> T,
{
    let mut next = list.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = f(&list[index]);
    }
    next
}

pub fn move_adjacent<T: Clone>(list: &[T], index: usize, direction: Direction) -> Vec<T> {
    let mut next = list.to_vec();
    if let Some(target) = direction.neighbor(index, list.len()) {
        next.swap(index, target);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Education, Experience, Project};

    fn make_list() -> Vec<&'static str> {
        vec!["a", "b", "c"]
    }

    fn make_education(institution: &str) -> Education {
        Education {
            institution: institution.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_append_adds_exactly_one_at_tail() {
        let list = make_list();
        let next = append(&list, "d");
        assert_eq!(next, vec!["a", "b", "c", "d"]);
        assert_eq!(list.len(), 3, "input must be untouched");
    }

    #[test]
    fn test_remove_at_shifts_later_elements_down() {
        assert_eq!(remove_at(&make_list(), 1), vec!["a", "c"]);
        assert_eq!(remove_at(&make_list(), 0), vec!["b", "c"]);
        assert_eq!(remove_at(&make_list(), 2), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        assert_eq!(remove_at(&make_list(), 3), make_list());
        assert_eq!(remove_at::<&str>(&[], 0), Vec::<&str>::new());
    }

    #[test]
    fn test_update_at_replaces_only_target() {
        assert_eq!(update_at(&make_list(), 1, "x"), vec!["a", "x", "c"]);
        assert_eq!(update_at(&make_list(), 9, "x"), make_list());
    }

    #[test]
    fn test_update_with_skips_closure_out_of_range() {
        let next = update_with(&make_list(), 5, |_| panic!("must not be called"));
        assert_eq!(next, make_list());
    }

    #[test]
    fn test_move_swaps_with_neighbor() {
        assert_eq!(move_adjacent(&make_list(), 1, Direction::Up), vec!["b", "a", "c"]);
        assert_eq!(move_adjacent(&make_list(), 1, Direction::Down), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_move_at_boundaries_is_noop() {
        assert_eq!(move_adjacent(&make_list(), 0, Direction::Up), make_list());
        assert_eq!(move_adjacent(&make_list(), 2, Direction::Down), make_list());
        assert_eq!(move_adjacent(&make_list(), 7, Direction::Down), make_list());
    }

    #[test]
    fn test_education_last_item_down_is_unchanged() {
        let list = vec![
            make_education("MIT"),
            make_education("ETH"),
            make_education("KAIST"),
        ];
        assert_eq!(move_adjacent(&list, 2, Direction::Down), list);
    }

    #[test]
    fn test_length_changes_only_via_append_and_remove() {
        let mut list = make_list();
        list = append(&list, "d");
        assert_eq!(list.len(), 4);
        list = move_adjacent(&list, 3, Direction::Up);
        assert_eq!(list.len(), 4);
        list = update_at(&list, 0, "z");
        assert_eq!(list.len(), 4);
        list = remove_at(&list, 2);
        assert_eq!(list.len(), 3);
        assert_eq!(list, vec!["z", "b", "c"]);
    }

    #[test]
    fn test_update_at_turning_current_off_keeps_end_date() {
        let list = vec![Experience {
            company: "A".to_string(),
            current: true,
            ..Default::default()
        }];
        let replacement = Experience {
            current: false,
            end_date: "2023-05".to_string(),
            ..list[0].clone()
        };
        let next = update_at(&list, 0, replacement);
        assert!(!next[0].current);
        assert_eq!(next[0].end_date, "2023-05");
    }

    #[test]
    fn test_append_default_project_is_fully_empty() {
        let next = append(&[], Project::default());
        assert_eq!(next.len(), 1);
        let project = &next[0];
        assert!(project.technologies.is_empty());
        assert!(!project.current);
        assert!(project.name.is_empty());
        assert!(project.description.is_empty());
        assert!(project.link.is_empty());
        assert!(project.start_date.is_empty());
        assert!(project.end_date.is_empty());
    }

    #[test]
    fn test_neighbor_rejects_out_of_range_index() {
        assert_eq!(Direction::Up.neighbor(0, 0), None);
        assert_eq!(Direction::Up.neighbor(4, 3), None);
        assert_eq!(Direction::Down.neighbor(1, 3), Some(2));
    }
}
