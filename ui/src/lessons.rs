//! Lessons listed on the landing page, in display order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonDescriptor {
    pub identifier: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub topics: &'static [&'static str],
}

impl LessonDescriptor {
    /// Route of the lesson's deck: `/` followed by the identifier.
    pub fn path(&self) -> String {
        format!("/{}", self.identifier)
    }
}

pub const LESSONS: &[LessonDescriptor] = &[
    LessonDescriptor {
        identifier: "data-visualization",
        title: "Visualização de Dados",
        description: "Aprenda as melhores práticas para criar visualizações eficazes e insights significativos a partir de dados.",
        icon: "📊",
        topics: &[
            "Tipos de gráficos",
            "Ferramentas de visualização",
            "Design de dashboards",
        ],
    },
    LessonDescriptor {
        identifier: "supervised-learning",
        title: "Aprendizado Supervisionado",
        description: "Entenda os fundamentos do aprendizado supervisionado e como aplicá-lo em problemas reais.",
        icon: "🤖",
        topics: &["Regressão", "Classificação", "Modelos preditivos"],
    },
];
