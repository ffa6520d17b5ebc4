//! Repository layout checks keeping `tests/unit` in step with `src`
