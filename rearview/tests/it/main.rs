#![allow(missing_docs)]

mod failures;
