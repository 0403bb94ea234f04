/// Given a sequence of tokens, the list can be iterated to obtain all the n-grams in the sequence,
/// starting from n-grams of length `min` up to n-grams of length `max`.
///
/// N-grams are produced grouped by length: first every n-gram of length `min` in document order,
/// then every n-gram of length `min + 1`, and so on. Tokens inside an n-gram are joined by a
/// single space. Lengths greater than the number of tokens produce nothing.
pub struct NGramList<T: AsRef<str>> {
    min: usize,
    max: usize,
    list: Vec<T>,
}

pub struct NGramListIntoIterator<T: AsRef<str>> {
    list: NGramList<T>,
    n: usize,
    start: usize,
}

impl<T: AsRef<str>> Iterator for NGramListIntoIterator<T> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        let len = self.list.len();
        while self.n <= self.list.max && self.n <= len {
            if self.start + self.n <= len {
                let item = self.list.ngram(self.start, self.n);
                self.start += 1;
                return Some(item);
            }
            self.n += 1;
            self.start = 0;
        }
        None
    }
}

impl<T: AsRef<str>> IntoIterator for NGramList<T> {
    type Item = String;
    type IntoIter = NGramListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        // zero-length n-grams do not exist
        let n = self.min.max(1);
        NGramListIntoIterator {
            list: self,
            n,
            start: 0,
        }
    }
}

impl<T: AsRef<str>> NGramList<T> {
    pub fn new(vec: Vec<T>, range: (usize, usize)) -> Self {
        Self {
            min: range.0,
            max: range.1,
            list: vec,
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Joins the `n` tokens starting at `start`
    fn ngram(&self, start: usize, n: usize) -> String {
        let mut item = self.list[start].as_ref().to_string();
        for token in &self.list[start + 1..start + n] {
            item.push(' ');
            item.push_str(token.as_ref());
        }
        item
    }
}

/// Expands `tokens` into the ordered sequence of n-grams with lengths in `range` (both ends
/// included).
pub fn expand_ngrams<T: AsRef<str>>(tokens: Vec<T>, range: (usize, usize)) -> Vec<String> {
    NGramList::new(tokens, range).into_iter().collect()
}

#[cfg(test)]
#[macro_export]
macro_rules! column_for_word {
    ($voc:expr, $transf:expr, $word: expr ) => {
        $transf.column($voc.iter().position(|s| *s == $word.to_string()).unwrap())
    };
}
