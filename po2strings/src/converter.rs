//! The PO to `.strings` converter.
//!
//! Conversion is a single pass over the catalog lines. An explicit state
//! machine decides, from the current line alone, whether it starts an entry,
//! continues one, or is skipped. Records are rendered into the output buffer
//! as soon as their `msgstr` has been read; no entry list is kept.
//!
//! Problems inside the catalog never stop the conversion. They are recorded as
//! [`Diagnostic`]s, logged with `log::warn!`, and the converter resumes from
//! the current line.

use crate::{
    codec::Conversion,
    error::Error,
    line::{LineKind, classify, unquote},
    options::{ConvertOptions, OrphanPolicy},
    render::Renderer,
    traits::LineSource,
    types::{Diagnostic, DiagnosticKind, Entry, OutputRecord, PluralForm},
};

/// Where the converter is within an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Between entries.
    #[default]
    ExpectEntry,
    /// After a reference comment, waiting for `msgid`.
    ExpectMsgid,
    /// After `msgid`, an optional `msgid_plural` may follow.
    ExpectPluralOrMsgstr,
    /// Reading `msgstr` / `msgstr[N]` lines.
    ExpectMsgstr,
}

/// One-line lookahead over a [`LineSource`].
struct Cursor<S> {
    source: S,
    line: Option<String>,
    number: usize,
}

impl<S: LineSource> Cursor<S> {
    fn new(source: S) -> Result<Self, Error> {
        let mut cursor = Cursor {
            source,
            line: None,
            number: 0,
        };
        cursor.advance()?;
        Ok(cursor)
    }

    fn advance(&mut self) -> Result<(), Error> {
        self.line = self.source.next_line()?;
        self.number = self.source.line_number();
        Ok(())
    }

    fn fragment(&self) -> Option<&str> {
        self.line.as_deref().filter(|line| line.starts_with('"'))
    }
}

/// Converts PO catalog lines into a `.strings` table.
///
/// # Example
///
/// ```rust
/// use po2strings::{ConvertOptions, PoConverter, reader::LineReader};
///
/// let po = "#: main.c:3\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n";
/// let mut converter = PoConverter::new(ConvertOptions::new().with_header(false));
/// converter.process(LineReader::new(po.as_bytes()))?;
/// assert_eq!(converter.result(), "\n/* main.c:3 */\n\"Hello\" = \"Bonjour\";\n");
/// # Ok::<(), po2strings::Error>(())
/// ```
#[derive(Debug)]
pub struct PoConverter {
    options: ConvertOptions,
    renderer: Renderer,
    buf: String,
    diagnostics: Vec<Diagnostic>,
    translated: usize,
    untranslated: usize,
    state: State,
    entry: Entry,
}

impl PoConverter {
    pub fn new(options: ConvertOptions) -> Self {
        let renderer = Renderer::new(options.escaping);
        let mut buf = String::new();
        if options.header {
            renderer.header(&mut buf);
        }
        PoConverter {
            options,
            renderer,
            buf,
            diagnostics: Vec::new(),
            translated: 0,
            untranslated: 0,
            state: State::default(),
            entry: Entry::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Output assembled so far, before transcoding.
    pub fn result(&self) -> &str {
        &self.buf
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes every line of `source`, appending to the output buffer.
    ///
    /// Only I/O failures of the source are returned as errors.
    pub fn process<S: LineSource>(&mut self, source: S) -> Result<(), Error> {
        let mut cursor = Cursor::new(source)?;
        self.state = State::ExpectEntry;

        while let Some(line) = cursor.line.clone() {
            let next = match self.state {
                State::ExpectEntry => self.expect_entry(&mut cursor, &line)?,
                State::ExpectMsgid => self.expect_msgid(&mut cursor, &line)?,
                State::ExpectPluralOrMsgstr => self.expect_plural_or_msgstr(&mut cursor, &line)?,
                State::ExpectMsgstr => self.expect_msgstr(&mut cursor, &line)?,
            };
            if next != self.state {
                log::debug!("line {}: {:?} -> {:?}", cursor.number, self.state, next);
            }
            self.state = next;
        }

        self.end_of_input(cursor.number);
        Ok(())
    }

    /// Finishes the conversion, handing out the assembled text and diagnostics.
    pub fn finish(self) -> Conversion {
        Conversion {
            text: self.buf,
            diagnostics: self.diagnostics,
            translated: self.translated,
            untranslated: self.untranslated,
        }
    }

    fn expect_entry<S: LineSource>(
        &mut self,
        cursor: &mut Cursor<S>,
        line: &str,
    ) -> Result<State, Error> {
        match classify(line) {
            LineKind::Reference(text) => {
                self.entry = Entry::with_comment(text);
                self.renderer.comment(&mut self.buf, text);
                cursor.advance()?;
                Ok(State::ExpectMsgid)
            }
            LineKind::Blank | LineKind::Comment => {
                cursor.advance()?;
                Ok(State::ExpectEntry)
            }
            LineKind::Msgid(head) if self.options.orphans == OrphanPolicy::Convert => {
                self.entry = Entry::default();
                self.entry.msgid = self.collect_string(cursor, head)?;
                if self.entry.msgid.is_empty() {
                    // The catalog header; its msgstr is skipped at the top level.
                    log::debug!("line {}: skipping entry with empty msgid", cursor.number);
                    Ok(State::ExpectEntry)
                } else {
                    Ok(State::ExpectPluralOrMsgstr)
                }
            }
            LineKind::Msgid(_)
            | LineKind::Msgstr {
                form: None,
                value: Some(_),
            } => {
                log::debug!("line {}: discarding standalone `{}`", cursor.number, line);
                cursor.advance()?;
                self.skip_fragments(cursor)?;
                Ok(State::ExpectEntry)
            }
            _ => {
                self.warn(cursor.number, DiagnosticKind::UnsupportedLine, line);
                cursor.advance()?;
                Ok(State::ExpectEntry)
            }
        }
    }

    fn expect_msgid<S: LineSource>(
        &mut self,
        cursor: &mut Cursor<S>,
        line: &str,
    ) -> Result<State, Error> {
        match classify(line) {
            LineKind::Reference(_) | LineKind::Comment => {
                cursor.advance()?;
                Ok(State::ExpectMsgid)
            }
            LineKind::Msgid(head) => {
                self.entry.msgid = self.collect_string(cursor, head)?;
                Ok(State::ExpectPluralOrMsgstr)
            }
            _ => {
                // Leave the line for the top level.
                self.warn(cursor.number, DiagnosticKind::ExpectedMsgid, line);
                Ok(State::ExpectEntry)
            }
        }
    }

    fn expect_plural_or_msgstr<S: LineSource>(
        &mut self,
        cursor: &mut Cursor<S>,
        line: &str,
    ) -> Result<State, Error> {
        if let LineKind::MsgidPlural(head) = classify(line) {
            self.entry.plural_id = Some(self.collect_string(cursor, head)?);
        }
        Ok(State::ExpectMsgstr)
    }

    fn expect_msgstr<S: LineSource>(
        &mut self,
        cursor: &mut Cursor<S>,
        line: &str,
    ) -> Result<State, Error> {
        match classify(line) {
            LineKind::Msgstr { form, value } => {
                let form = form.unwrap_or_default();
                let key = self.record_key(form, cursor.number);
                let value = self.collect_string(cursor, value.unwrap_or(""))?;
                let record = OutputRecord::new(key, value.as_str());
                if record.is_untranslated() {
                    self.untranslated += 1;
                } else {
                    self.translated += 1;
                }
                self.renderer.record(&mut self.buf, &record);
                self.entry.msgstr.push((form, value));
                Ok(State::ExpectMsgstr)
            }
            _ => {
                // Leave the line for the top level.
                if self.entry.msgstr.is_empty() {
                    self.warn(cursor.number, DiagnosticKind::MissingMsgstr, line);
                }
                Ok(State::ExpectEntry)
            }
        }
    }

    fn record_key(&mut self, form: PluralForm, line_number: usize) -> String {
        if form.is_singular() {
            return self.entry.msgid.clone();
        }
        let base = match &self.entry.plural_id {
            Some(plural_id) => plural_id.clone(),
            None => {
                let text = format!("msgstr[{}]", form);
                self.warn(line_number, DiagnosticKind::MissingPluralId, &text);
                self.entry.msgid.clone()
            }
        };
        format!("{}{}", base, form.key_suffix())
    }

    /// Collects a string value: the quoted remainder of the keyword line
    /// followed by any continuation fragments. The keyword line is consumed.
    fn collect_string<S: LineSource>(
        &mut self,
        cursor: &mut Cursor<S>,
        head: &str,
    ) -> Result<String, Error> {
        let mut value = String::new();
        if head.starts_with('"') {
            value.push_str(unquote(head));
        } else if let Some(line) = cursor.line.clone() {
            self.warn(cursor.number, DiagnosticKind::UnquotedValue, &line);
        }
        cursor.advance()?;

        while let Some(fragment) = cursor.fragment() {
            value.push_str(unquote(fragment));
            cursor.advance()?;
        }
        Ok(value)
    }

    fn skip_fragments<S: LineSource>(&mut self, cursor: &mut Cursor<S>) -> Result<(), Error> {
        while cursor.fragment().is_some() {
            cursor.advance()?;
        }
        Ok(())
    }

    fn end_of_input(&mut self, last_line: usize) {
        match self.state {
            State::ExpectMsgid => self.warn(last_line, DiagnosticKind::UnexpectedEof, ""),
            State::ExpectPluralOrMsgstr | State::ExpectMsgstr if self.entry.msgstr.is_empty() => {
                self.warn(last_line, DiagnosticKind::MissingMsgstr, "")
            }
            _ => {}
        }
        self.state = State::ExpectEntry;
    }

    fn warn(&mut self, line: usize, kind: DiagnosticKind, text: &str) {
        let diagnostic = Diagnostic::new(line, kind, text);
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
