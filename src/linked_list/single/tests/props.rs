use std::{iter, ptr, vec::Vec};

use proptest::{collection::vec, prelude::*};
use rpds::Vector;

use super::values;
use crate::linked_list::single::list::{Position, SList};

const POOL: usize = 8;

/// Payloads are references into this table, so each value names one address.
static PAYLOADS: [i32; POOL] = [0, 1, 2, 3, 4, 5, 6, 7];

#[derive(Debug, Clone)]
enum Operation {
    Append(usize),
    Prepend(usize),
    Insert(usize, Option<usize>),
    Remove(usize),
    Reverse,
    Concat(Vec<usize>),
    Copy,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0..POOL).prop_map(Operation::Append),
        2 => (0..POOL).prop_map(Operation::Prepend),
        2 => (0..POOL, proptest::option::of(0..12usize))
            .prop_map(|(item, at)| Operation::Insert(item, at)),
        2 => (0..POOL).prop_map(Operation::Remove),
        1 => Just(Operation::Reverse),
        1 => vec(0..POOL, 0..4).prop_map(Operation::Concat),
        1 => Just(Operation::Copy),
    ]
}

fn build(items: &[usize]) -> SList<&'static i32> {
    SList::new()
        .append_all(items.iter().map(|&i| &PAYLOADS[i]))
        .unwrap()
}

fn model_of(list: &SList<&'static i32>) -> Vector<usize> {
    values(list).into_iter().map(|v| v as usize).collect()
}

fn model_insert(model: &Vector<usize>, at: usize, item: usize) -> Vector<usize> {
    let at = at.min(model.len());
    model
        .iter()
        .take(at)
        .copied()
        .chain(iter::once(item))
        .chain(model.iter().skip(at).copied())
        .collect()
}

fn model_remove(model: &Vector<usize>, item: usize) -> Vector<usize> {
    match model.iter().position(|&v| v == item) {
        Some(found) => model
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != found)
            .map(|(_, &v)| v)
            .collect(),
        None => model.clone(),
    }
}

proptest! {
    #[test]
    fn test_operations_match_model(ops in vec(operation(), 0..64)) {
        let mut list = SList::new();
        let mut model: Vector<usize> = Vector::new();
        let mut snapshots = Vec::new();

        for op in ops {
            match op {
                Operation::Append(item) => {
                    list = list.append(&PAYLOADS[item]).unwrap();
                    model = model.push_back(item);
                }
                Operation::Prepend(item) => {
                    list = list.prepend(&PAYLOADS[item]).unwrap();
                    model = model_insert(&model, 0, item);
                }
                Operation::Insert(item, Some(at)) => {
                    list = list.insert(&PAYLOADS[item], Position::At(at)).unwrap();
                    model = model_insert(&model, at, item);
                }
                Operation::Insert(item, None) => {
                    list = list.insert(&PAYLOADS[item], Position::End).unwrap();
                    model = model.push_back(item);
                }
                Operation::Remove(item) => {
                    list = list.remove(&&PAYLOADS[item]);
                    model = model_remove(&model, item);
                }
                Operation::Reverse => {
                    list = list.reverse();
                    let items: Vec<usize> = model.iter().copied().collect();
                    model = items.into_iter().rev().collect();
                }
                Operation::Concat(items) => {
                    list = list.concat(build(&items));
                    model = items.iter().fold(model, |m, &item| m.push_back(item));
                }
                Operation::Copy => {
                    snapshots.push((list.copy().unwrap(), model.clone()));
                }
            }

            prop_assert_eq!(model_of(&list), model.clone());
            prop_assert_eq!(list.len(), model.len());
            if let Some(last) = list.last() {
                prop_assert!(ptr::eq(last, list.at(list.len() - 1).unwrap()));
            }
            for item in 0..POOL {
                let expected = model.iter().position(|&v| v == item);
                prop_assert_eq!(list.index(&&PAYLOADS[item]), expected);
            }
        }

        // later changes to the source never show up in earlier copies
        for (copy, model) in &snapshots {
            prop_assert_eq!(&model_of(copy), model);
        }
    }

    #[test]
    fn test_reverse_twice_restores(items in vec(0..POOL, 0..32)) {
        let list = build(&items);
        let before = values(&list);
        prop_assert_eq!(values(&list.reverse().reverse()), before);
    }

    #[test]
    fn test_concat_joins(first in vec(0..POOL, 0..16), second in vec(0..POOL, 0..16)) {
        let list = build(&first).concat(build(&second));
        prop_assert_eq!(list.len(), first.len() + second.len());

        let expected: Vec<i32> = first.iter().chain(&second).map(|&i| PAYLOADS[i]).collect();
        prop_assert_eq!(values(&list), expected);
    }

    #[test]
    fn test_remove_undoes_append(items in vec(0..POOL - 1, 0..16)) {
        let absent = &PAYLOADS[POOL - 1];
        let list = build(&items);
        let before = values(&list);

        let list = list.append(absent).unwrap().remove(&absent);
        prop_assert_eq!(values(&list), before);
    }

    #[test]
    fn test_copy_agrees_on_index(items in vec(0..POOL, 0..16)) {
        let list = build(&items);
        let copy = list.copy().unwrap();
        prop_assert_eq!(values(&copy), values(&list));
        for payload in &PAYLOADS {
            prop_assert_eq!(copy.index(&payload), list.index(&payload));
        }
    }
}
