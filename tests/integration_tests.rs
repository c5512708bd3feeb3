use knuthsort::prelude::*;
use knuthsort::{KnuthGaps, is_sorted};
use rand::Rng;

fn histogram(data: &[u8]) -> [usize; 256] {
    let mut counts = [0usize; 256];
    data.iter().for_each(|&b| counts[b as usize] += 1);
    counts
}

#[test]
fn test_scenarios_from_arguments() {
    let cases: [(&[&str], &[u8]); 4] = [
        (&["d", "b", "a", "c"], b"a b c d "),
        (&["z", "z", "a"], b"a z z "),
        (&["5", "1", "3", "2", "4"], b"1 2 3 4 5 "),
        (&[], b""),
    ];

    for (args, expected) in cases {
        let mut out = Vec::new();
        run(args.iter().copied(), EmptyArgPolicy::Reject, &mut out).unwrap();
        assert_eq!(out, expected, "args: {:?}", args);
    }
}

#[test]
fn test_sort_value_and_reference_forms_agree() {
    let input = Sequence::from(b"the quick brown fox".to_vec());

    let by_value = sort(input.clone());

    let mut by_ref = input.clone();
    by_ref.sort();

    let mut raw = input.into_bytes();
    shell_sort(&mut raw);

    assert_eq!(by_value, by_ref);
    assert_eq!(by_value.as_bytes(), raw.as_slice());
}

#[test]
fn test_boundaries() {
    assert_eq!(sort(Sequence::new()), Sequence::new());
    assert_eq!(sort(Sequence::from(b"q".to_vec())).as_bytes(), b"q");
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let len = rng.random_range(0..300);
        let mut input = vec![0u8; len];
        rng.fill(&mut input[..]);

        let mut expected = input.clone();
        expected.sort();

        let original = histogram(&input);
        shell_sort(&mut input);

        assert!(is_sorted(&input));
        assert_eq!(histogram(&input), original);
        assert_eq!(input, expected);
    }
}

#[test]
fn test_idempotent() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..500);
        let mut input = vec![0u8; len];
        rng.fill(&mut input[..]);

        let once = sort(Sequence::from(input));
        let twice = sort(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_edge_cases() {
    // 1. All same
    let mut input = vec![b'k'; 100];
    let expected = input.clone();
    shell_sort(&mut input);
    assert_eq!(input, expected);

    // 2. Reversed
    let mut input: Vec<u8> = (b'a'..=b'z').rev().collect();
    shell_sort(&mut input);
    assert_eq!(input, (b'a'..=b'z').collect::<Vec<_>>());

    // 3. Sorted
    let mut input: Vec<u8> = (0..=255).collect();
    let expected = input.clone();
    shell_sort(&mut input);
    assert_eq!(input, expected);

    // 4. Two values interleaved
    let mut input: Vec<u8> = (0..64).map(|i| if i % 2 == 0 { b'b' } else { b'a' }).collect();
    shell_sort(&mut input);
    assert_eq!(&input[..32], &[b'a'; 32]);
    assert_eq!(&input[32..], &[b'b'; 32]);
}

#[test]
fn test_gap_lengths_around_thresholds() {
    // Lengths where the initial gap steps up: 6, 15, 42, 123.
    let mut rng = rand::rng();
    for len in [5, 6, 7, 14, 15, 16, 41, 42, 43, 122, 123, 124] {
        let mut input = vec![0u8; len];
        rng.fill(&mut input[..]);

        let mut expected = input.clone();
        expected.sort();

        shell_sort(&mut input);
        assert_eq!(input, expected, "len {}", len);
        assert_eq!(KnuthGaps::new(len).last(), Some(1));
    }
}

#[test]
fn test_empty_argument_policies() {
    let mut out = Vec::new();
    let err = run(["b", "", "a"], EmptyArgPolicy::Reject, &mut out).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { position: 2 }));
    assert!(out.is_empty());

    let sorted = run(["b", "", "a"], EmptyArgPolicy::Skip, &mut out).unwrap();
    assert_eq!(sorted.as_bytes(), b"ab");
    assert_eq!(out, b"a b ");
}
