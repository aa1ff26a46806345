//! Basic operations: edit distances and vector metrics.
//!
//! ```bash
//! cargo run --example basic_ops
//! ```

use simil::{
    cosine_similarity, damerau_levenshtein_str, euclidean_distance, levenshtein_str,
    manhattan_distance, CostModel, Error,
};

fn main() -> Result<(), Error> {
    // Two strings that differ by one adjacent swap
    let typo = "recieve";
    let word = "receive";
    let costs = CostModel::default();

    println!("Edit Distance");
    println!("=============\n");
    println!("{typo:?} -> {word:?}");
    println!(
        "  levenshtein:         {}",
        levenshtein_str(typo, word, &costs)?
    );
    println!(
        "  damerau-levenshtein: {}",
        damerau_levenshtein_str(typo, word, &costs)?
    );

    // Deletions are cheap, insertions expensive
    let lopsided = CostModel::default().with_insert(3.0).with_delete(0.5);
    println!("\nWith insert=3, delete=0.5:");
    println!(
        "  \"kitten\" -> \"kit\":    {}",
        levenshtein_str("kitten", "kit", &lopsided)?
    );
    println!(
        "  \"kit\" -> \"kitten\":    {}",
        levenshtein_str("kit", "kitten", &lopsided)?
    );

    println!("\nVector Metrics");
    println!("==============\n");
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 6.0, 3.0];
    let w = [1.0, 0.5, 2.0];
    println!("a = {a:?}");
    println!("b = {b:?}");
    println!("w = {w:?}\n");

    println!("  euclidean:          {:.4}", euclidean_distance(&a, &b, None)?);
    println!("  euclidean (w):      {:.4}", euclidean_distance(&a, &b, Some(&w[..]))?);
    println!("  manhattan:          {:.4}", manhattan_distance(&a, &b, None)?);
    println!("  manhattan (w):      {:.4}", manhattan_distance(&a, &b, Some(&w[..]))?);
    println!("  cosine:             {:.4}", cosine_similarity(&a, &b, None)?);
    println!("  cosine (w):         {:.4}", cosine_similarity(&a, &b, Some(&w[..]))?);

    // Zero vectors have no direction
    match cosine_similarity(&a, &[0.0, 0.0, 0.0], None) {
        Ok(c) => println!("\n  cosine vs zero:     {c}"),
        Err(e) => println!("\n  cosine vs zero:     error: {e}"),
    }

    Ok(())
}
