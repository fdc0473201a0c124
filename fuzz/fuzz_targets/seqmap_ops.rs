#![no_main]
use libfuzzer_sys::fuzz_target;

use seqmap::Map;

#[derive(Debug, arbitrary::Arbitrary)]
enum Op {
    Add(u8, u8),
    Set(u8, u8),
    Remove(u8),
    RemoveAt(u8),
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut map = Map::new();

    for op in ops {
        match op {
            Op::Add(k, v) => {
                let had = map.contains_key(&k);
                assert_eq!(map.add(k, v).is_err(), had);
            }
            Op::Set(k, v) => {
                let before = map.position(&k).ok();
                map.set(k, v);
                assert_eq!(map.position(&k).ok(), before.or(Some(map.len() - 1)));
            }
            Op::Remove(k) => {
                let _ = map.remove(&k);
            }
            Op::RemoveAt(i) => {
                let _ = map.remove_at(i as usize);
            }
            Op::Clear => map.clear(),
        }

        assert_eq!(map.keys().len(), map.values().len());
        for (i, k) in map.keys().iter().enumerate() {
            assert_eq!(map.position(k), Ok(i));
        }
    }
});
