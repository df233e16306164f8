//! Prints an array before and after every sort.
//!
//! `RUST_LOG=classic_sorts=debug cargo run --example before_after` also shows
//! how many shuffles bogosort needed.

use classic_sorts::{bogosort, quicksort, Algorithm, BogosortConfig, SortError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SortError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let original: Vec<i32> = (12..=50).rev().step_by(2).collect();
    println!("Original array: {original:?}");

    for algo in Algorithm::ALL {
        if algo == Algorithm::Bogosort {
            continue;
        }
        let mut v = original.clone();
        algo.sort(&mut v)?;
        println!("{algo}: {v:?}");
    }
    println!("quicksort (owned): {:?}", quicksort(original.clone()));

    // bogosort only gets a short prefix
    let mut short = original[..6].to_vec();
    let shuffles = bogosort(&mut short, &BogosortConfig::default())?;
    println!("bogosort of {:?}: {short:?} after {shuffles} shuffles", &original[..6]);
    Ok(())
}
