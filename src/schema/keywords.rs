//! Closed keyword sets used by attribute values.
//!
//! Every enumerated attribute of the schema maps onto one of these enums. A
//! value outside the set is a schema violation, never a silent default.

/// An enum parsed from (and printed back to) a fixed attribute keyword.
pub trait Keyword: Sized + Copy {
    /// Parse the XML spelling.
    fn from_keyword(s: &str) -> Option<Self>;
    /// The XML spelling.
    fn keyword(self) -> &'static str;
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Keyword for $name {
            fn from_keyword(s: &str) -> Option<Self> {
                match s {
                    $( $text => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn keyword(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }
    };
}

keyword_enum! {
    /// Access level of a member, base class or inner compound.
    pub enum Protection {
        Public => "public",
        Protected => "protected",
        Private => "private",
        Package => "package",
    }
}

keyword_enum! {
    /// `virt` attribute.
    pub enum Virtualness {
        NonVirtual => "non-virtual",
        Virtual => "virtual",
        PureVirtual => "pure-virtual",
    }
}

keyword_enum! {
    /// Kind of a compound (`compounddef/@kind`, `compound/@kind`).
    pub enum CompoundKind {
        Class => "class",
        Struct => "struct",
        Union => "union",
        Interface => "interface",
        Protocol => "protocol",
        Category => "category",
        Exception => "exception",
        Service => "service",
        Singleton => "singleton",
        Module => "module",
        Type => "type",
        File => "file",
        Namespace => "namespace",
        Group => "group",
        Page => "page",
        Example => "example",
        Dir => "dir",
        Concept => "concept",
    }
}

impl CompoundKind {
    /// Returns true for class-like kinds (class, struct, union, ...).
    pub fn is_class_like(self) -> bool {
        matches!(
            self,
            Self::Class
                | Self::Struct
                | Self::Union
                | Self::Interface
                | Self::Protocol
                | Self::Category
                | Self::Exception
                | Self::Service
                | Self::Singleton
        )
    }

    /// Human-readable label used in page titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Struct => "Struct",
            Self::Union => "Union",
            Self::Interface => "Interface",
            Self::Protocol => "Protocol",
            Self::Category => "Category",
            Self::Exception => "Exception",
            Self::Service => "Service",
            Self::Singleton => "Singleton",
            Self::Module => "Module",
            Self::Type => "Type",
            Self::File => "File",
            Self::Namespace => "Namespace",
            Self::Group => "Group",
            Self::Page => "Page",
            Self::Example => "Example",
            Self::Dir => "Folder",
            Self::Concept => "Concept",
        }
    }
}

keyword_enum! {
    /// Kind of a member (`memberdef/@kind`).
    pub enum MemberKind {
        Define => "define",
        Property => "property",
        Event => "event",
        Variable => "variable",
        Typedef => "typedef",
        Enum => "enum",
        Function => "function",
        Signal => "signal",
        Prototype => "prototype",
        Friend => "friend",
        Dcop => "dcop",
        Slot => "slot",
        Interface => "interface",
        Service => "service",
    }
}

keyword_enum! {
    /// Kind of a member section (`sectiondef/@kind`).
    pub enum SectionDefKind {
        UserDefined => "user-defined",
        PublicType => "public-type",
        PublicFunc => "public-func",
        PublicAttrib => "public-attrib",
        PublicSlot => "public-slot",
        Signal => "signal",
        DcopFunc => "dcop-func",
        Property => "property",
        Event => "event",
        PublicStaticFunc => "public-static-func",
        PublicStaticAttrib => "public-static-attrib",
        ProtectedType => "protected-type",
        ProtectedFunc => "protected-func",
        ProtectedAttrib => "protected-attrib",
        ProtectedSlot => "protected-slot",
        ProtectedStaticFunc => "protected-static-func",
        ProtectedStaticAttrib => "protected-static-attrib",
        PackageType => "package-type",
        PackageFunc => "package-func",
        PackageAttrib => "package-attrib",
        PackageStaticFunc => "package-static-func",
        PackageStaticAttrib => "package-static-attrib",
        PrivateType => "private-type",
        PrivateFunc => "private-func",
        PrivateAttrib => "private-attrib",
        PrivateSlot => "private-slot",
        PrivateStaticFunc => "private-static-func",
        PrivateStaticAttrib => "private-static-attrib",
        Friend => "friend",
        Related => "related",
        Define => "define",
        Prototype => "prototype",
        Typedef => "typedef",
        Enum => "enum",
        Func => "func",
        Var => "var",
    }
}

keyword_enum! {
    /// `kindref` of a reference.
    pub enum RefKind {
        /// Points at a whole compound page.
        Compound => "compound",
        /// Points at an anchor within a page.
        Member => "member",
    }
}

keyword_enum! {
    /// `simplesect/@kind`.
    pub enum SimpleSectKind {
        See => "see",
        Return => "return",
        Author => "author",
        Authors => "authors",
        Version => "version",
        Since => "since",
        Date => "date",
        Note => "note",
        Warning => "warning",
        Pre => "pre",
        Post => "post",
        Copyright => "copyright",
        Invariant => "invariant",
        Remark => "remark",
        Attention => "attention",
        Important => "important",
        Par => "par",
        Rcs => "rcs",
    }
}

impl SimpleSectKind {
    /// Default title shown before the section body.
    pub fn title(self) -> &'static str {
        match self {
            Self::See => "See also",
            Self::Return => "Returns",
            Self::Author => "Author",
            Self::Authors => "Authors",
            Self::Version => "Version",
            Self::Since => "Since",
            Self::Date => "Date",
            Self::Note => "Note",
            Self::Warning => "Warning",
            Self::Pre => "Precondition",
            Self::Post => "Postcondition",
            Self::Copyright => "Copyright",
            Self::Invariant => "Invariant",
            Self::Remark => "Remarks",
            Self::Attention => "Attention",
            Self::Important => "Important",
            Self::Par => "",
            Self::Rcs => "RCS",
        }
    }
}

keyword_enum! {
    /// `parameterlist/@kind`.
    pub enum ParamListKind {
        Param => "param",
        RetVal => "retval",
        Exception => "exception",
        TemplateParam => "templateparam",
    }
}

impl ParamListKind {
    /// Heading of the parameter table.
    pub fn title(self) -> &'static str {
        match self {
            Self::Param => "Parameters",
            Self::RetVal => "Return values",
            Self::Exception => "Exceptions",
            Self::TemplateParam => "Template Parameters",
        }
    }
}

keyword_enum! {
    /// `parametername/@direction`.
    pub enum ParamDirection {
        In => "in",
        Out => "out",
        InOut => "inout",
    }
}

keyword_enum! {
    /// Output format of an image or a format-only block.
    pub enum OutputFormat {
        Html => "html",
        Latex => "latex",
        Man => "man",
        Rtf => "rtf",
        Xml => "xml",
        Docbook => "docbook",
    }
}

keyword_enum! {
    /// `highlight/@class` inside program listings.
    pub enum HighlightClass {
        Comment => "comment",
        Normal => "normal",
        Preprocessor => "preprocessor",
        Keyword => "keyword",
        KeywordType => "keywordtype",
        KeywordFlow => "keywordflow",
        StringLiteral => "stringliteral",
        XmlCdata => "xmlcdata",
        CharLiteral => "charliteral",
        VhdlKeyword => "vhdlkeyword",
        VhdlLogic => "vhdllogic",
        VhdlChar => "vhdlchar",
        VhdlDigit => "vhdldigit",
    }
}

keyword_enum! {
    /// `childnode/@relation` in graphs.
    pub enum GraphRelation {
        Include => "include",
        Usage => "usage",
        PublicInheritance => "public-inheritance",
        ProtectedInheritance => "protected-inheritance",
        PrivateInheritance => "private-inheritance",
        TypeConstraint => "type-constraint",
        TemplateInstance => "template-instance",
    }
}

keyword_enum! {
    /// `option/@type` in `Doxyfile.xml`.
    pub enum OptionType {
        Int => "int",
        Bool => "bool",
        String => "string",
        StringList => "stringlist",
    }
}

keyword_enum! {
    /// Horizontal alignment of a table cell.
    pub enum Align {
        Left => "left",
        Right => "right",
        Center => "center",
    }
}

keyword_enum! {
    /// Vertical alignment of a table cell.
    pub enum VAlign {
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
}
