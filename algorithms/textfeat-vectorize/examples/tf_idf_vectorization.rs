use textfeat::traits::Fit;
use textfeat_vectorize::{
    CountVectorizer, Norm, TextNormalizer, TfIdfVectorizer, VectorizeError, WhitespaceTokenizer,
};

fn main() -> Result<(), VectorizeError> {
    let corpus = [
        "This is the first document",
        "This document is the second document",
        "And this is the third one",
        "Is this the first document",
    ];

    let (counter, counts) = CountVectorizer::params(TextNormalizer::default(), WhitespaceTokenizer)
        .n_gram_range(1, 2)
        .min_df(2usize)
        .max_df(0.8f64)
        .max_features(5)
        .fit_transform(&corpus)?;
    println!("vocabulary:");
    for (term, idx) in counter.vocabulary().iter() {
        println!("  {:>3} {}", idx, term);
    }
    println!("pruned {} entries", counter.pruned_terms().len());
    println!("counts:\n{}", counts);

    let vectorizer = TfIdfVectorizer::params(TextNormalizer::default(), WhitespaceTokenizer)
        .sublinear_tf(true)
        .norm(Some(Norm::L1))
        .fit(&corpus)?;
    if let Some(idf) = vectorizer.idf() {
        println!("idf: {:.3}", idf);
    }
    let weighted = vectorizer.transform(&["the third document is this one"])?;
    println!("weights: {:.3}", weighted);

    Ok(())
}
