//! Static question catalog.
//!
//! Every prompt category owns a fixed, ordered list of questions. The set of
//! categories is closed, so it is modelled as an enum plus a static table
//! rather than a runtime map.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CatalogError;

/// The input shape expected for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// One line of free text
    SingleLineText,
    /// Free text that may span several lines
    MultiLineText,
    /// One option picked from a dropdown
    SingleSelect,
    /// Any number of options, kept in the order they were picked
    MultiSelect,
    /// One option picked from a radio group
    ExclusiveChoice,
}

impl QuestionKind {
    /// Whether answers are typed rather than picked from options
    pub fn is_free_text(self) -> bool {
        matches!(self, Self::SingleLineText | Self::MultiLineText)
    }

    /// Whether the answer is a list of options
    pub fn is_multi_choice(self) -> bool {
        matches!(self, Self::MultiSelect)
    }
}

/// A single question in a category's questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionDefinition {
    /// Identifier, unique within its category
    pub id: &'static str,
    /// Text shown to the user
    pub prompt: &'static str,
    pub kind: QuestionKind,
    /// Options for choice kinds; empty for free text
    pub options: &'static [&'static str],
    pub required: bool,
}

/// Identifier of one of the fixed prompt categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    CreativeWriting,
    CodeGeneration,
    DataAnalysis,
    ContentCreation,
    ProblemSolving,
    Translation,
    Summarization,
    Chatbot,
    Custom,
}

impl CategoryId {
    /// All categories in menu order
    pub const ALL: [CategoryId; 9] = [
        CategoryId::CreativeWriting,
        CategoryId::CodeGeneration,
        CategoryId::DataAnalysis,
        CategoryId::ContentCreation,
        CategoryId::ProblemSolving,
        CategoryId::Translation,
        CategoryId::Summarization,
        CategoryId::Chatbot,
        CategoryId::Custom,
    ];

    /// Stable kebab-case identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreativeWriting => "creative-writing",
            Self::CodeGeneration => "code-generation",
            Self::DataAnalysis => "data-analysis",
            Self::ContentCreation => "content-creation",
            Self::ProblemSolving => "problem-solving",
            Self::Translation => "translation",
            Self::Summarization => "summarization",
            Self::Chatbot => "chatbot",
            Self::Custom => "custom",
        }
    }

    /// The catalog entry for this category
    pub fn category(self) -> &'static Category {
        // CATALOG is declared in ALL order
        &CATALOG[self as usize]
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        CategoryId::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A prompt category with its questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub questions: &'static [QuestionDefinition],
}

impl Category {
    /// Look up a question by id
    pub fn question(&self, id: &str) -> Option<&'static QuestionDefinition> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// Every category, in menu order
pub fn categories() -> &'static [Category] {
    &CATALOG
}

const fn text(id: &'static str, prompt: &'static str, required: bool) -> QuestionDefinition {
    QuestionDefinition {
        id,
        prompt,
        kind: QuestionKind::SingleLineText,
        options: &[],
        required,
    }
}

const fn textarea(id: &'static str, prompt: &'static str, required: bool) -> QuestionDefinition {
    QuestionDefinition {
        id,
        prompt,
        kind: QuestionKind::MultiLineText,
        options: &[],
        required,
    }
}

const fn choice(
    id: &'static str,
    prompt: &'static str,
    kind: QuestionKind,
    options: &'static [&'static str],
) -> QuestionDefinition {
    // every choice question in the catalog is mandatory
    QuestionDefinition {
        id,
        prompt,
        kind,
        options,
        required: true,
    }
}

const LANGUAGES: &[&str] = &[
    "Português",
    "Inglês",
    "Espanhol",
    "Francês",
    "Alemão",
    "Italiano",
    "Japonês",
    "Chinês",
    "Outro",
];

static CREATIVE_WRITING: [QuestionDefinition; 6] = [
    choice(
        "genre",
        "Qual gênero literário você deseja?",
        QuestionKind::SingleSelect,
        &[
            "Ficção Científica",
            "Romance",
            "Fantasia",
            "Terror",
            "Drama",
            "Comédia",
            "Mistério",
        ],
    ),
    choice(
        "tone",
        "Qual tom você prefere?",
        QuestionKind::SingleSelect,
        &[
            "Formal",
            "Casual",
            "Humorístico",
            "Sério",
            "Inspirador",
            "Sombrio",
        ],
    ),
    choice(
        "length",
        "Qual o tamanho desejado do texto?",
        QuestionKind::ExclusiveChoice,
        &[
            "Curto (1-2 parágrafos)",
            "Médio (3-5 parágrafos)",
            "Longo (6+ parágrafos)",
            "História completa",
        ],
    ),
    textarea("topic", "Qual é o tema ou enredo principal?", true),
    textarea(
        "characters",
        "Descreva os personagens principais (opcional):",
        false,
    ),
    text(
        "style",
        "Há algum estilo específico de autor que deseja emular? (opcional)",
        false,
    ),
];

static CODE_GENERATION: [QuestionDefinition; 6] = [
    choice(
        "language",
        "Qual linguagem de programação?",
        QuestionKind::SingleSelect,
        &[
            "Python",
            "JavaScript",
            "TypeScript",
            "Java",
            "C++",
            "C#",
            "Go",
            "Rust",
            "PHP",
            "Ruby",
        ],
    ),
    text("framework", "Usa algum framework específico?", false),
    textarea(
        "functionality",
        "Descreva a funcionalidade que precisa implementar:",
        true,
    ),
    choice(
        "complexity",
        "Nível de complexidade desejado:",
        QuestionKind::ExclusiveChoice,
        &["Básico", "Intermediário", "Avançado"],
    ),
    textarea(
        "requirements",
        "Requisitos específicos (performance, segurança, etc.):",
        false,
    ),
    choice(
        "documentation",
        "Precisa de documentação no código?",
        QuestionKind::ExclusiveChoice,
        &[
            "Sim, comentários detalhados",
            "Sim, comentários básicos",
            "Não",
        ],
    ),
];

static DATA_ANALYSIS: [QuestionDefinition; 4] = [
    choice(
        "data-type",
        "Qual tipo de dados você está analisando?",
        QuestionKind::SingleSelect,
        &[
            "Numéricos",
            "Textuais",
            "Categóricos",
            "Séries temporais",
            "Imagens",
            "Mistos",
        ],
    ),
    textarea("analysis-goal", "Qual o objetivo da análise?", true),
    choice(
        "visualization",
        "Precisa de visualizações?",
        QuestionKind::MultiSelect,
        &["Gráficos", "Tabelas", "Dashboards", "Mapas", "Não preciso"],
    ),
    text(
        "statistical-methods",
        "Métodos estatísticos específicos? (opcional)",
        false,
    ),
];

static CONTENT_CREATION: [QuestionDefinition; 5] = [
    choice(
        "content-type",
        "Que tipo de conteúdo você precisa?",
        QuestionKind::SingleSelect,
        &[
            "Post de Blog",
            "Email Marketing",
            "Copy de Vendas",
            "Post para Redes Sociais",
            "Artigo Técnico",
            "Descrição de Produto",
        ],
    ),
    text("audience", "Quem é o público-alvo?", true),
    textarea("goal", "Qual o objetivo do conteúdo?", true),
    text(
        "keywords",
        "Palavras-chave importantes (separadas por vírgula):",
        false,
    ),
    choice(
        "tone-voice",
        "Tom de voz desejado:",
        QuestionKind::SingleSelect,
        &[
            "Profissional",
            "Amigável",
            "Persuasivo",
            "Educativo",
            "Inspirador",
            "Divertido",
        ],
    ),
];

static PROBLEM_SOLVING: [QuestionDefinition; 4] = [
    textarea(
        "problem-description",
        "Descreva o problema em detalhes:",
        true,
    ),
    textarea("context", "Contexto adicional:", false),
    textarea("constraints", "Há restrições ou limitações?", false),
    choice(
        "solution-type",
        "Que tipo de solução você procura?",
        QuestionKind::MultiSelect,
        &[
            "Passo a passo",
            "Estratégia geral",
            "Múltiplas alternativas",
            "Análise detalhada",
        ],
    ),
];

static TRANSLATION: [QuestionDefinition; 4] = [
    choice(
        "source-language",
        "Idioma de origem:",
        QuestionKind::SingleSelect,
        LANGUAGES,
    ),
    choice(
        "target-language",
        "Idioma de destino:",
        QuestionKind::SingleSelect,
        LANGUAGES,
    ),
    choice(
        "formality",
        "Nível de formalidade:",
        QuestionKind::ExclusiveChoice,
        &["Formal", "Neutro", "Informal"],
    ),
    text(
        "context-translation",
        "Contexto do texto (técnico, literário, comercial, etc.):",
        true,
    ),
];

static SUMMARIZATION: [QuestionDefinition; 3] = [
    choice(
        "summary-length",
        "Tamanho do resumo desejado:",
        QuestionKind::ExclusiveChoice,
        &[
            "Muito curto (2-3 frases)",
            "Curto (1 parágrafo)",
            "Médio (2-3 parágrafos)",
            "Detalhado",
        ],
    ),
    choice(
        "focus",
        "Foco do resumo:",
        QuestionKind::MultiSelect,
        &[
            "Principais ideias",
            "Conclusões",
            "Dados e estatísticas",
            "Argumentos",
            "Tudo",
        ],
    ),
    choice(
        "format",
        "Formato preferido:",
        QuestionKind::ExclusiveChoice,
        &["Parágrafo corrido", "Bullet points", "Misto"],
    ),
];

static CHATBOT: [QuestionDefinition; 4] = [
    textarea("bot-purpose", "Qual a função do assistente virtual?", true),
    choice(
        "personality",
        "Personalidade desejada:",
        QuestionKind::SingleSelect,
        &[
            "Profissional",
            "Amigável",
            "Divertido",
            "Empático",
            "Direto ao ponto",
            "Educativo",
        ],
    ),
    text("knowledge-area", "Área de conhecimento especializado:", true),
    choice(
        "interaction-style",
        "Estilo de interação:",
        QuestionKind::MultiSelect,
        &[
            "Fazer perguntas de esclarecimento",
            "Dar exemplos",
            "Fornecer explicações detalhadas",
            "Ser conciso",
            "Usar analogias",
        ],
    ),
];

static CUSTOM: [QuestionDefinition; 5] = [
    textarea("custom-purpose", "Descreva o propósito do prompt:", true),
    textarea("custom-requirements", "Requisitos específicos:", true),
    textarea("custom-constraints", "Restrições ou limitações:", false),
    text("custom-format", "Formato de saída esperado:", false),
    textarea(
        "custom-examples",
        "Exemplos do que você espera (opcional):",
        false,
    ),
];

static CATALOG: [Category; 9] = [
    Category {
        id: CategoryId::CreativeWriting,
        display_name: "Escrita Criativa",
        icon: "✍️",
        questions: &CREATIVE_WRITING,
    },
    Category {
        id: CategoryId::CodeGeneration,
        display_name: "Geração de Código",
        icon: "💻",
        questions: &CODE_GENERATION,
    },
    Category {
        id: CategoryId::DataAnalysis,
        display_name: "Análise de Dados",
        icon: "📊",
        questions: &DATA_ANALYSIS,
    },
    Category {
        id: CategoryId::ContentCreation,
        display_name: "Criação de Conteúdo",
        icon: "📝",
        questions: &CONTENT_CREATION,
    },
    Category {
        id: CategoryId::ProblemSolving,
        display_name: "Resolução de Problemas",
        icon: "🧩",
        questions: &PROBLEM_SOLVING,
    },
    Category {
        id: CategoryId::Translation,
        display_name: "Tradução",
        icon: "🌐",
        questions: &TRANSLATION,
    },
    Category {
        id: CategoryId::Summarization,
        display_name: "Resumo de Texto",
        icon: "📋",
        questions: &SUMMARIZATION,
    },
    Category {
        id: CategoryId::Chatbot,
        display_name: "Assistente Virtual",
        icon: "🤖",
        questions: &CHATBOT,
    },
    Category {
        id: CategoryId::Custom,
        display_name: "Personalizado",
        icon: "⚙️",
        questions: &CUSTOM,
    },
];
