use super::*;

/// The parameters supplied with a command
#[derive(Debug, Clone, Default)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList
{
    pub fn new(args: Vec<String>) -> Self
    {
        Self(args)
    }

    /// Iterate over the arguments in order
    pub fn iter(&self) -> ArgumentListIter<'_>
    {
        ArgumentListIter { list: &self.0, index: 0 }
    }
}

/// Walks an [`ArgumentList`], distinguishing parameters the command
/// requires from those it can do without.
#[derive(Clone)]
pub struct ArgumentListIter<'a>
{
    list: &'a [String],
    index: usize,
}

impl<'a> ArgumentListIter<'a>
{
    /// Take the next argument, which the command can't proceed without
    pub fn next_arg(&mut self) -> Result<&'a str, CommandError>
    {
        self.next_optional().ok_or(CommandError::NotEnoughParameters)
    }

    /// Take the next argument, if there is one
    pub fn next_optional(&mut self) -> Option<&'a str>
    {
        let idx = self.index;
        let ret = self.list.get(idx).map(AsRef::as_ref);
        if ret.is_some() {
            self.index += 1;
        }
        ret
    }
}
