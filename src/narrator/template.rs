use crate::error::TemplateError;

/// A piece of a parsed message pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// `{N}`: filled from the N-th order field.
    Field(usize),
    /// `{}`: filled with the freshly drawn minutes.
    Time,
}

/// A message pattern with positional field and time placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    segments: Vec<Segment>,
}

impl MessageTemplate {
    /// Parses `pattern`, e.g. `Deliver your order #{0} to {1} in {} minutes!`.
    ///
    /// A lone `}` is kept as literal text.
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;
        let mut offset = 0;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| TemplateError::UnclosedPlaceholder {
                    pattern: pattern.to_string(),
                    position: offset + open,
                })?;

            let placeholder = &after[..close];
            let segment = if placeholder.is_empty() {
                Segment::Time
            } else {
                placeholder
                    .parse::<usize>()
                    .map(Segment::Field)
                    .map_err(|_| TemplateError::InvalidPlaceholder {
                        pattern: pattern.to_string(),
                        placeholder: placeholder.to_string(),
                    })?
            };

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);

            let consumed = open + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitutes `fields` into positional placeholders and `minutes` into every `{}`.
    pub fn render(&self, fields: &[String], minutes: u32) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Time => out.push_str(&minutes.to_string()),
                Segment::Field(index) => {
                    let field = fields.get(*index).ok_or(TemplateError::MissingField {
                        index: *index,
                        available: fields.len(),
                    })?;
                    out.push_str(field);
                }
            }
        }
        Ok(out)
    }
}

/// What a narrator step prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateDescriptor {
    /// No pattern: `{label} - {minutes} min!`.
    Default { label: &'static str },
    Pattern(MessageTemplate),
}

impl TemplateDescriptor {
    pub fn render(&self, fields: &[String], minutes: u32) -> Result<String, TemplateError> {
        match self {
            TemplateDescriptor::Default { label } => Ok(format!("{} - {} min!", label, minutes)),
            TemplateDescriptor::Pattern(template) => template.render(fields, minutes),
        }
    }
}

pub const PICKUP_PATTERN: &str = "\u{1F3E0} Please pick your order #{0} within {} minutes!";
pub const DELIVERY_PATTERN: &str = "\u{1F69A} Deliver your order #{0} to {1} in {} minutes!";
