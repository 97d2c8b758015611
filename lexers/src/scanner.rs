#![deny(warnings)]

// A scanner buffers items pulled from `src` so a token under construction
// can be inspected, extended or backtracked before it is extracted.
pub struct Scanner<I: Iterator>
where
    I::Item: Clone,
{
    src: I,
    buf: Vec<I::Item>,
    // number of buffered items that belong to the current token
    pos: usize,
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.fill(self.pos + 1) {
            self.pos += 1;
            self.curr()
        } else {
            None
        }
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos > self.buf.len() {
            return false;
        }
        self.pos = pos;
        true
    }

    // last item accepted into the current token
    pub fn curr(&self) -> Option<I::Item> {
        self.pos.checked_sub(1).map(|i| self.buf[i].clone())
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        if self.fill(self.pos + 1) {
            Some(self.buf[self.pos].clone())
        } else {
            None
        }
    }

    // make sure at least n items are buffered, false on end of input
    fn fill(&mut self, n: usize) -> bool {
        while self.buf.len() < n {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => return false,
            }
        }
        true
    }

    pub fn accept_if<F: Fn(&I::Item) -> bool>(&mut self, pred: F) -> Option<I::Item> {
        match self.peek() {
            Some(next) if pred(&next) => self.next(),
            _ => None,
        }
    }

    // Advance while items match, return whether the scanner moved
    pub fn skip_all<F: Fn(&I::Item) -> bool>(&mut self, pred: F) -> bool {
        let start = self.pos;
        while self.accept_if(&pred).is_some() {}
        self.pos > start
    }

    // Advance until an item matches or input ends, the matching item is not consumed
    pub fn until<F: Fn(&I::Item) -> bool>(&mut self, pred: F) -> bool {
        self.skip_all(|item| !pred(item))
    }

    pub fn view(&self) -> &[I::Item] {
        &self.buf[..self.pos]
    }

    // drop the current token and start fresh
    pub fn ignore(&mut self) {
        self.buf.drain(..self.pos);
        self.pos = 0;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let token = self.view().to_vec();
        self.ignore();
        token
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_ws(&mut self) -> bool {
        self.skip_all(|c| c.is_whitespace())
    }
}
