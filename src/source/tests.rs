use std::io::{Cursor, Read};

use assert_matches::assert_matches;
use maplit::hashset;
use mockall::predicate::eq;

use super::*;
use crate::vfs::MockFileSystem;

#[test]
fn test_read_patterns() {
    let text = "a@b.com\n  c@d.com  \n# comment\n\na@b.com # again\n10.0.0.* #ip\n#\n";
    let patterns = read_patterns(Cursor::new(text)).unwrap();
    assert_eq!(patterns, hashset! {"a@b.com".to_owned(), "c@d.com".to_owned(), "10.0.0.*".to_owned()});
}

#[test]
fn test_read_patterns_crlf() {
    let patterns = read_patterns(Cursor::new("one\r\ntwo\r\n")).unwrap();
    assert_eq!(patterns, hashset! {"one".to_owned(), "two".to_owned()});
}

#[test]
fn test_read_patterns_invalid_utf8() {
    let result = read_patterns(Cursor::new(b"ok\n\xff\xfe\n".to_vec()));
    assert_matches!(result, Err(e) if e.kind() == io::ErrorKind::InvalidData);
}

#[test]
fn test_read_empty_file() {
    let patterns = read_patterns_from_file("src/testing/assets/patterns/empty.txt").unwrap();
    assert!(patterns.is_empty());
}

#[test]
fn test_read_file_ignores_commented_lines() {
    let patterns = read_patterns_from_file("src/testing/assets/patterns/commented-lines.txt").unwrap();
    assert_eq!(
        patterns,
        hashset! {
            "comments_after_with_whitespace_after@test.com".to_owned(),
            "comments_after_without_whitespace_after@test.com".to_owned(),
            "nocomments@test.com".to_owned(),
        }
    );
}

#[test]
fn test_read_missing_file() {
    let result = read_patterns_from_file("src/testing/assets/patterns/does not exist.txt");
    assert_matches!(result, Err(Error::PatternSource { path, source }) => {
        assert_eq!(path, Path::new("src/testing/assets/patterns/does not exist.txt"));
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    });
}

#[test]
fn test_read_with_mock_fs() {
    let mut fs = MockFileSystem::new();
    fs.expect_open()
        .with(eq(Path::new("lists/ips.txt")))
        .times(1)
        .returning(|_| Ok(Box::new(Cursor::new("10.0.0.*\n10.100.0.1\n"))));

    let patterns = PatternSource::new(&fs).read(Path::new("lists/ips.txt")).unwrap();
    assert_eq!(patterns, hashset! {"10.0.0.*".to_owned(), "10.100.0.1".to_owned()});
}

struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::other("device gone"));
        }
        self.served = true;
        let data = b"first\nsecond";
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

#[test]
fn test_read_failure_mid_file() {
    let mut fs = MockFileSystem::new();
    fs.expect_open()
        .returning(|_| Ok(Box::new(FailingReader { served: false })));

    let result = PatternSource::new(fs).read(Path::new("broken.txt"));
    assert_matches!(result, Err(Error::PatternSource { source, .. }) if source.to_string() == "device gone");
}
