// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod scenarios_tests {
    use simplevec::{SimpleVector, SimpleVectorBehaviour, SimpleVectorError, reserve};

    #[test]
    fn test_insert_into_literal_list() {
        let mut vec = SimpleVector::try_from([1, 2, 3]).expect("Failed to try_from(..)");

        vec.insert(1, 9).expect("Failed to insert(..)");

        assert_eq!(vec, [1, 9, 2, 3]);
        assert_eq!(vec.len(), 4);
    }

    #[test]
    fn test_erase_from_literal_list() {
        let mut vec = SimpleVector::try_from([1, 2, 3]).expect("Failed to try_from(..)");

        vec.erase(1);

        assert_eq!(vec, [1, 3]);
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn test_reservation_hint_then_ten_pushes() {
        let mut vec = SimpleVector::from_reserve(reserve(10)).expect("Failed to from_reserve(..)");
        vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);

        assert_eq!(vec.capacity(), 10);
        assert_eq!(vec.len(), 0);

        // Any reallocation would fail under the injected behaviour
        for i in 0..10u64 {
            vec.push_back(i).expect("Failed to push_back(..)");
        }

        assert_eq!(vec.capacity(), 10);
        assert_eq!(vec.len(), 10);
    }

    #[test]
    fn test_move_out_of_five_elements() {
        let mut source = SimpleVector::with_size(5).expect("Failed to with_size(..)");
        for (i, slot) in source.iter_mut().enumerate() {
            *slot = i as u32 + 1;
        }

        let destination = source.take();

        assert_eq!(source.len(), 0);
        assert_eq!(source.capacity(), 0);
        assert_eq!(destination, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_move_assignment() {
        let mut source = SimpleVector::from_elem(5, &7u8).expect("Failed to from_elem(..)");
        let mut destination = SimpleVector::from_slice(&[1u8]).expect("Failed to from_slice(..)");

        destination.assign_take(&mut source);

        assert_eq!(destination, [7; 5]);
        assert!(source.is_empty());
        assert_eq!(source.capacity(), 0);
    }

    #[test]
    fn test_copy_then_mutate_copy() {
        let original = SimpleVector::try_from(["a", "b"]).expect("Failed to try_from(..)");
        let mut copy = original.clone();

        copy[1] = "z";
        copy.push_back("c").expect("Failed to push_back(..)");

        assert_eq!(original, ["a", "b"]);
        assert_eq!(copy, ["a", "z", "c"]);
    }

    #[test]
    fn test_equal_sequences_with_different_capacities() {
        let a = SimpleVector::try_from([1, 2, 3]).expect("Failed to try_from(..)");
        let mut b = SimpleVector::from_reserve(reserve(64)).expect("Failed to from_reserve(..)");
        for value in [1, 2, 3] {
            b.push_back(value).expect("Failed to push_back(..)");
        }

        assert_eq!(a, b);
        assert_ne!(a.capacity(), b.capacity());

        let c = SimpleVector::try_from([1, 2, 4]).expect("Failed to try_from(..)");
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn test_checked_access_at_boundaries() {
        let vec = SimpleVector::try_from([5, 6]).expect("Failed to try_from(..)");

        assert_eq!(vec.at(vec.len() - 1), Ok(&6));
        assert_eq!(
            vec.at(vec.len()),
            Err(SimpleVectorError::OutOfRange { index: 2, size: 2 })
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut vec = SimpleVector::try_from([5, 6]).expect("Failed to try_from(..)");

        vec.clear();
        vec.clear();

        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 2);
    }

    #[test]
    fn test_growth_after_clear_reuses_storage() {
        let mut vec = SimpleVector::try_from([5, 6, 7, 8]).expect("Failed to try_from(..)");
        vec.clear();
        vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);

        vec.resize(4).expect("Failed to resize(..)");

        assert_eq!(vec, [0, 0, 0, 0]);
    }
}
