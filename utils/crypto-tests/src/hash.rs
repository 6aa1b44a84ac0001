/// A known-answer test vector: a message and its expected digest.
pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

pub fn main_test<F>(digest: F, tests: &[Test])
    where F: Fn(&[u8]) -> [u8; 20]
{
    // Test that each vector produces the known digest
    for t in tests.iter() {
        let out = digest(t.input);

        assert_eq!(out[..], t.output[..], "digest mismatch for {}", t.name);
    }

    // Test that a second pass over the same input is byte-identical
    for t in tests.iter() {
        let first = digest(t.input);
        let second = digest(t.input);

        assert_eq!(first[..], second[..], "digest not deterministic for {}", t.name);
    }
}

#[cfg(feature = "use-std")]
pub fn one_million_a<F>(digest: F, expected: &[u8])
    where F: Fn(&[u8]) -> [u8; 20]
{
    let input = vec![b'a'; 1000000];
    let out = digest(&input);
    assert_eq!(out[..], expected[..]);
}
