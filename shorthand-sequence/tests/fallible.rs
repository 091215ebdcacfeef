// The fallible query forms: a failing callable aborts the pass right away,
// the error comes back unwrapped, and no partial result is observable.

use shorthand_sequence::{Sequence, SequenceCore, SequenceQuery};

fn fixture() -> Sequence<i32> {
    Sequence::from(vec![1, 2, 3, 4, 5])
}

#[test]
fn try_filter_propagates_a_fault_and_stops_the_pass() {
    let seq = fixture();
    let mut visited = Vec::new();
    let result: Result<Sequence<i32>, String> = seq.try_filter(|x| {
        visited.push(*x);
        if *x == 3 {
            Err("predicate failed".to_string())
        } else {
            Ok(x % 2 == 0)
        }
    });
    assert_eq!(result, Err("predicate failed".to_string()));
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn try_map_propagates_a_fault_and_stops_the_pass() {
    let seq = fixture();
    let mut visited = Vec::new();
    let result: Result<Sequence<i32>, String> = seq.try_map(|x| {
        visited.push(*x);
        if *x == 3 {
            Err("transform failed".to_string())
        } else {
            Ok(x * 2)
        }
    });
    assert_eq!(result, Err("transform failed".to_string()));
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn try_reduce_propagates_a_fault_and_stops_the_pass() {
    let seq = fixture();
    let mut visited = Vec::new();
    let result: Result<i32, String> = seq.try_reduce(0, |acc, x| {
        visited.push(*x);
        if *x == 3 {
            Err("reducer failed".to_string())
        } else {
            Ok(acc + x)
        }
    });
    assert_eq!(result, Err("reducer failed".to_string()));
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn try_filter_succeeds_when_the_predicate_never_fails() {
    let seq = fixture();
    let result: Result<Sequence<i32>, String> = seq.try_filter(|x| Ok(x % 2 == 0));
    assert_eq!(result.unwrap().to_vec(), vec![2, 4]);
}

#[test]
fn try_reject_matches_try_filter_of_the_negation() {
    let seq = fixture();
    let rejected: Result<Sequence<i32>, String> = seq.try_reject(|x| Ok(x % 2 == 0));
    let negated: Result<Sequence<i32>, String> = seq.try_filter(|x| Ok(x % 2 != 0));
    assert_eq!(rejected, negated);
}

#[test]
fn try_all_propagates_a_fault_raised_before_the_deciding_element() {
    let seq = Sequence::from(vec![1, 2, 3]);
    let result: Result<bool, String> = seq.try_all(|x| {
        if *x == 2 {
            Err("predicate failed".to_string())
        } else {
            Ok(true)
        }
    });
    assert_eq!(result, Err("predicate failed".to_string()));
}

#[test]
fn try_all_short_circuits_before_a_later_fault() {
    // the deciding element comes first, so the faulting element
    // is never visited
    let seq = Sequence::from(vec![10, 2, 3]);
    let result: Result<bool, String> = seq.try_all(|x| {
        if *x == 2 {
            Err("predicate failed".to_string())
        } else {
            Ok(*x < 5)
        }
    });
    assert_eq!(result, Ok(false));
}

#[test]
fn try_any_short_circuits_before_a_later_fault() {
    let seq = Sequence::from(vec![2, 3, 4]);
    let result: Result<bool, String> = seq.try_any(|x| {
        if *x == 3 {
            Err("predicate failed".to_string())
        } else {
            Ok(x % 2 == 0)
        }
    });
    assert_eq!(result, Ok(true));
}

#[test]
fn try_none_halts_at_the_first_match() {
    let seq = Sequence::from(vec![1, 2, 3]);
    let mut visited = Vec::new();
    let result: Result<bool, String> = seq.try_none(|x| {
        visited.push(*x);
        Ok(*x == 2)
    });
    assert_eq!(result, Ok(false));
    assert_eq!(visited, vec![1, 2]);
}

#[test]
fn fallible_queries_over_empty_input_never_invoke_the_callable() {
    let seq = Sequence::<i32>::empty();
    let mut calls = 0;
    let mut count = |x: &i32| -> Result<bool, String> {
        calls += 1;
        Ok(*x > 0)
    };
    assert!(seq.try_all(&mut count).unwrap());
    assert!(!seq.try_any(&mut count).unwrap());
    assert!(seq.try_none(&mut count).unwrap());
    let filtered: Result<Sequence<i32>, String> = seq.try_filter(&mut count);
    assert!(filtered.unwrap().is_empty());
    let rejected: Result<Sequence<i32>, String> = seq.try_reject(&mut count);
    assert!(rejected.unwrap().is_empty());
    let mapped: Result<Sequence<i32>, String> = seq.try_map(|x| {
        calls += 1;
        Ok(x * 2)
    });
    assert!(mapped.unwrap().is_empty());
    let reduced: Result<i32, String> = seq.try_reduce(42, |acc, x| {
        calls += 1;
        Ok(acc + x)
    });
    assert_eq!(reduced.unwrap(), 42);
    assert_eq!(calls, 0);
}
