//! Aula 2: Modelos Supervisionados. No quizzes; the activity slides reveal
//! their answers as fragments instead.

use dioxus::prelude::*;

use super::fragments::{AgendaItem, AgendaSlide, DeckLogo, TitleSlide};
use crate::deck::SlideDeck;

const AGENDA: &[AgendaItem] = &[
    AgendaItem { icon: "🧠", title: "Revisão & Motivação", detail: Some("Por que precisamos de modelos?") },
    AgendaItem { icon: "🎯", title: "Aprendizado Supervisionado", detail: Some("Conceitos fundamentais") },
    AgendaItem { icon: "📊", title: "Regressão vs Classificação", detail: Some("Diferenças práticas") },
    AgendaItem { icon: "📈", title: "Regressão Linear", detail: Some("Teoria completa") },
    AgendaItem { icon: "⚙️", title: "Implementação do Zero", detail: Some("Python + NumPy") },
    AgendaItem { icon: "🔧", title: "Scikit-learn", detail: Some("Comparação prática") },
    AgendaItem { icon: "🌟", title: "Outros Modelos", detail: Some("Visão geral") },
    AgendaItem { icon: "🎯", title: "Exercícios", detail: Some("Fixação dos conceitos") },
];

/// Hours studied and the grade obtained, used to motivate regression.
pub const STUDY_HOURS_VS_GRADE: [(u8, f32); 4] = [(2, 5.0), (4, 6.5), (6, 8.0), (8, 9.2)];

/// "Regressão ou Classificação?" activity: (icon, scenario, answer).
pub const SCENARIOS: [(&str, &str, &str); 3] = [
    (
        "🏪",
        "Prever quantos produtos uma loja venderá no próximo mês",
        "✅ Regressão (número contínuo)",
    ),
    (
        "🎬",
        "Classificar um filme como \"Comédia\", \"Drama\" ou \"Ação\"",
        "✅ Classificação (categorias discretas)",
    ),
    (
        "🏥",
        "Determinar se um paciente tem COVID-19 baseado nos sintomas",
        "✅ Classificação (Positivo/Negativo)",
    ),
];

/// (icon, model, when to use it).
pub const MODEL_GUIDE: [(&str, &str, &str); 4] = [
    ("📈", "Regressão Linear", "Relação linear simples, fácil interpretação, baseline"),
    ("📊", "Regressão Logística", "Classificação binária, probabilidades, interpretável"),
    ("🌳", "Árvores de Decisão", "Dados categóricos, relações não-lineares, fácil visualização"),
    ("👥", "KNN", "Poucos dados, padrões locais, sistemas de recomendação"),
];

/// (title, task).
pub const EXERCISES: [(&str, &str); 3] = [
    (
        "1. Regressão com Múltiplas Variáveis",
        "Implementar regressão linear com 2+ features (ex: preço de casas baseado em área + quartos)",
    ),
    (
        "2. Visualizar Função de Custo",
        "Plotar como o erro diminui ao longo das épocas (curva de aprendizado)",
    ),
    (
        "3. Comparar Learning Rates",
        "Testar diferentes valores de α (0.001, 0.01, 0.1, 1.0) e ver o impacto na convergência",
    ),
];

const LEARNED: &[(&str, &str)] = &[
    ("Aprendizado supervisionado", "conceitos"),
    ("Regressão vs Classificação", "diferenças"),
    ("Regressão Linear", "teoria completa"),
    ("Implementação do zero", "Python/NumPy"),
    ("Scikit-learn", "facilidade de uso"),
    ("Outros modelos", "visão geral"),
];

#[component]
pub fn SupervisedLearningDeck() -> Element {
    rsx! {
        SlideDeck { title: "Modelos Supervisionados",
            TitleSlide {
                title: "Modelos Supervisionados",
                subtitle: "Machine Learning & Inteligência Artificial",
                logo_first: true,
            }

            AgendaSlide { items: AGENDA }

            section { class: "slide",
                h2 { class: "slide__title", "Revisão: Tratamento de Dados" }
                div { class: "slide__grid-2",
                    div {
                        h3 { class: "slide__accent", "O que vimos até agora:" }
                        ul { class: "slide__list",
                            li { "✅ Limpeza de dados" }
                            li { "✅ Tratamento de valores ausentes" }
                            li { "✅ Identificação de outliers" }
                            li { "✅ Visualização de dados" }
                        }
                        div { class: "slide__callout fragment",
                            h4 { "Próximo passo:" }
                            p {
                                "Como fazer o computador "
                                strong { "aprender" }
                                " padrões dos dados?"
                            }
                        }
                    }
                    div { class: "slide__card slide__card--blue fragment",
                        div { class: "slide__emoji", "🏠" }
                        h4 { "Exemplo: Previsão de Preços" }
                        p { "Como prever o preço de uma casa baseado em:" }
                        ul {
                            li { "📐 Área (m²)" }
                            li { "🛏️ Número de quartos" }
                            li { "📍 Localização" }
                            li { "🏗️ Ano de construção" }
                        }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "O que é Aprendizado Supervisionado?" }
                p { class: "slide__lead",
                    "É quando ensinamos o computador usando "
                    strong { "exemplos com respostas corretas" }
                }
                div { class: "slide__cards",
                    div { class: "slide__card slide__card--green fragment",
                        div { class: "slide__emoji", "🧠" }
                        h4 { "Fase de Treino" }
                        p { "Mostramos muitos exemplos:" }
                        p { strong { "Dados → Resposta Correta" } }
                    }
                    div { class: "slide__card slide__card--blue fragment",
                        div { class: "slide__emoji", "🔍" }
                        h4 { "Fase de Predição" }
                        p { "Modelo faz previsões:" }
                        p { strong { "Novos Dados → Predição" } }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Conceitos Fundamentais" }
                div { class: "slide__bands",
                    div { class: "slide__band slide__band--blue fragment",
                        h4 { "📊 Features (X) - Variáveis de Entrada" }
                        p { "As características que usamos para fazer a predição" }
                        p { em { "Exemplo: área da casa, número de quartos, localização" } }
                    }
                    div { class: "slide__band slide__band--green fragment",
                        h4 { "🎯 Target (y) - Variável de Saída" }
                        p { "O que queremos prever" }
                        p { em { "Exemplo: preço da casa, nota do aluno, diagnóstico médico" } }
                    }
                    div { class: "slide__band slide__band--purple fragment",
                        h4 { "🔄 Train/Test Split" }
                        p { "Dividimos os dados: parte para treinar, parte para testar" }
                        p { em { "Exemplo: 80% treino, 20% teste" } }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Exemplo: Predição de Nota do Aluno" }
                div { class: "slide__grid-2",
                    div {
                        h3 { class: "slide__accent", "Dados de Treino:" }
                        table { class: "slide__table",
                            thead {
                                tr {
                                    th { "Horas Estudadas" }
                                    th { "Nota" }
                                }
                            }
                            tbody {
                                for (hours, grade) in STUDY_HOURS_VS_GRADE {
                                    tr { key: "{hours}",
                                        td { "{hours}" }
                                        td { "{grade:.1}" }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        div { class: "slide__callout fragment",
                            h4 { "Pergunta:" }
                            p {
                                "Se um aluno estudar "
                                strong { "7 horas" }
                                ", qual nota ele tirará?"
                            }
                        }
                        div { class: "slide__card slide__card--blue",
                            div { class: "slide__emoji", "📈" }
                            p {
                                "O modelo precisa encontrar o "
                                strong { "padrão" }
                                " nos dados"
                            }
                        }
                        div { class: "slide__callout slide__callout--green fragment",
                            h4 { "Padrão descoberto:" }
                            p { "Mais horas = Nota maior" }
                        }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Supervisionado vs Não-supervisionado" }
                div { class: "slide__cards",
                    div { class: "slide__card slide__card--green",
                        div { class: "slide__emoji", "👨‍🏫" }
                        h3 { "Supervisionado" }
                        p { strong { "Temos as respostas corretas" } }
                        ul {
                            li { "✅ Dados + Rótulos" }
                            li { "✅ Aprende com exemplos" }
                            li { "✅ Faz predições" }
                        }
                        p { class: "slide__example", "Ex: Email → Spam/Não-spam" }
                    }
                    div { class: "slide__card slide__card--purple",
                        div { class: "slide__emoji", "🔍" }
                        h3 { "Não-supervisionado" }
                        p { strong { "Não temos as respostas" } }
                        ul {
                            li { "🔍 Só os dados" }
                            li { "🔍 Encontra padrões ocultos" }
                            li { "🔍 Agrupa similaridades" }
                        }
                        p { class: "slide__example", "Ex: Agrupar clientes similares" }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Regressão vs Classificação" }
                div { class: "slide__cards",
                    div { class: "slide__card slide__card--blue",
                        div { class: "slide__emoji", "📈" }
                        h3 { "Regressão" }
                        h4 { "Saída Contínua" }
                        p { "Prevemos um número que pode ter infinitos valores" }
                        h5 { "Exemplos:" }
                        ul {
                            li { "🏠 Preço de casas: R$ 350.000" }
                            li { "🌡️ Temperatura: 23.5°C" }
                            li { "📊 Nota: 8.7" }
                            li { "⏰ Tempo: 2.3 horas" }
                        }
                    }
                    div { class: "slide__card slide__card--green",
                        div { class: "slide__emoji", "🏷️" }
                        h3 { "Classificação" }
                        h4 { "Saída Discreta" }
                        p { "Prevemos uma categoria/classe específica" }
                        h5 { "Exemplos:" }
                        ul {
                            li { "📧 Email: Spam/Não-spam" }
                            li { "🏥 Diagnóstico: Sim/Não" }
                            li { "🌦️ Clima: Sol/Chuva/Nuvem" }
                            li { "⭐ Avaliação: 1, 2, 3, 4, 5" }
                        }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "🧠 Atividade: Regressão ou Classificação?" }
                div { class: "slide__bands",
                    for ((icon, scenario, answer), number) in SCENARIOS.iter().zip(1..) {
                        div { key: "{number}", class: "slide__band slide__band--blue fragment",
                            h4 { "Cenário {number}:" }
                            p { "{icon} {scenario}" }
                            p { class: "slide__answer fragment", strong { "{answer}" } }
                        }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Regressão Linear" }
                div { class: "slide__grid-2",
                    div {
                        h3 { class: "slide__accent", "O modelo mais simples e fundamental!" }
                        p {
                            "Encontra a "
                            strong { "melhor linha reta" }
                            " que passa pelos pontos dos dados."
                        }
                        div { class: "slide__formula",
                            h4 { "Fórmula da Reta:" }
                            p { class: "slide__formula-main", "ŷ = mx + b" }
                            ul {
                                li { strong { "ŷ" } " = valor predito" }
                                li { strong { "m" } " = inclinação (slope)" }
                                li { strong { "x" } " = variável de entrada" }
                                li { strong { "b" } " = intercepto" }
                            }
                        }
                    }
                    div { class: "slide__card slide__card--blue",
                        div { class: "slide__emoji", "📈" }
                        h4 { "Visualização:" }
                        p {
                            "Imagine pontos espalhados em um gráfico e uma linha tentando \"encaixar\" o melhor possível entre eles."
                        }
                        p { class: "slide__example", "(Vamos ver isso na prática!)" }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Como o Modelo \"Aprende\"?" }
                div { class: "slide__bands",
                    div { class: "slide__band slide__band--blue fragment",
                        h4 { "1. Função de Custo (Erro)" }
                        p { class: "slide__formula-main",
                            "J(m, b) = (1/n) × Σ(y"
                            sub { "i" }
                            " - ŷ"
                            sub { "i" }
                            ")²"
                        }
                        p {
                            "Mede o "
                            strong { "quão longe" }
                            " nossas predições estão dos valores reais"
                        }
                    }
                    div { class: "slide__band slide__band--green fragment",
                        h4 { "2. Gradiente Descendente" }
                        p {
                            "Algoritmo que "
                            strong { "ajusta" }
                            " os parâmetros m e b para "
                            strong { "minimizar" }
                            " o erro"
                        }
                        p { class: "slide__formula-main", "m = m - α × ∂J/∂m" }
                        p { class: "slide__formula-main", "b = b - α × ∂J/∂b" }
                        p { class: "slide__example", "α = learning rate (taxa de aprendizado)" }
                    }
                    div { class: "slide__band slide__band--purple fragment",
                        h4 { "3. Iteração" }
                        p {
                            "Repete o processo centenas/milhares de vezes até encontrar os "
                            strong { "melhores valores" }
                            " de m e b"
                        }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Vamos para a nossa lousa virtual" }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Implementação do Zero - Momento live coding" }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Outros Modelos Supervisionados" }
                div { class: "slide__cards slide__cards--four",
                    div { class: "slide__card slide__card--blue fragment",
                        div { class: "slide__emoji", "📊" }
                        h4 { "Regressão Logística" }
                        p { "Para " strong { "classificação binária" } }
                        p { class: "slide__example", "Ex: Spam/Não-spam, Aprovado/Reprovado" }
                    }
                    div { class: "slide__card slide__card--green fragment",
                        div { class: "slide__emoji", "🌳" }
                        h4 { "Árvores de Decisão" }
                        p { "Faz " strong { "perguntas sequenciais" } }
                        p { class: "slide__example", "Ex: \"Idade > 30?\" → \"Salário > 5000?\"" }
                    }
                    div { class: "slide__card slide__card--purple fragment",
                        div { class: "slide__emoji", "👥" }
                        h4 { "K-Nearest Neighbors" }
                        p { strong { "\"Diga-me com quem andas...\"" } }
                        p { class: "slide__example", "Ex: Classifica baseado nos vizinhos mais próximos" }
                    }
                    div { class: "slide__card slide__card--orange fragment",
                        div { class: "slide__emoji", "🚀" }
                        h4 { "Support Vector Machine" }
                        p { "Encontra a " strong { "melhor fronteira" } }
                        p { class: "slide__example", "Ex: Separa classes com máxima margem" }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Quando usar cada modelo?" }
                div { class: "slide__bands",
                    for (icon, model, usage) in MODEL_GUIDE.iter() {
                        div { key: "{model}", class: "slide__band slide__band--blue",
                            h4 { "{icon} {model}" }
                            p { "{usage}" }
                        }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Recapitulação" }
                div { class: "slide__grid-2",
                    div {
                        h3 { class: "slide__accent", "O que aprendemos:" }
                        ul { class: "slide__list",
                            for (topic, remark) in LEARNED.iter() {
                                li { key: "{topic}",
                                    "✅ "
                                    strong { "{topic}" }
                                    " - {remark}"
                                }
                            }
                        }
                    }
                    div {
                        h3 { class: "slide__accent", "Conceitos-chave:" }
                        ul { class: "slide__list",
                            li { strong { "Features (X)" } " → " strong { "Target (y)" } }
                            li { strong { "ŷ = mx + b" } }
                            li { strong { "Gradiente Descendente" } }
                            li { strong { "Train/Test Split" } }
                        }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Atividades de Fixação" }
                div { class: "slide__bands",
                    for (title, task) in EXERCISES.iter() {
                        div { key: "{title}", class: "slide__band slide__band--green fragment",
                            h4 { "{title}" }
                            p { "{task}" }
                        }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "🚀 Desafio Final" }
                div { class: "slide__card slide__card--purple",
                    div { class: "slide__emoji", "🤔" }
                    h4 { "Questão para Reflexão:" }
                    p {
                        "\"Qual modelo supervisionado você acha que serviria para prever se um cliente vai cancelar um serviço?\""
                    }
                    p { class: "slide__example", "Dica: Pense no tipo de saída que queremos (contínua ou discreta)" }
                }
                div { class: "slide__callout slide__callout--green fragment",
                    h4 { "Resposta:" }
                    p {
                        strong { "Classificação!" }
                        " 🏷️ (Regressão Logística, Árvore de Decisão, ou KNN)"
                    }
                    p { "Saída: \"Vai cancelar\" ou \"Não vai cancelar\"" }
                }
            }

            section {
                class: "slide slide--closing",
                "data-background": "linear-gradient(to bottom right, #f5f7fa, #e4eff9)",
                h2 { class: "slide__title", "NOS VEMOS EM AGOSTO!!!" }
                div { class: "slide__farewell",
                    div {
                        h2 { "Obrigado e boas férias!" }
                        p { "Dúvidas?" }
                    }
                    DeckLogo {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agenda_pairs_each_topic_with_a_remark() {
        assert_eq!(AGENDA.len(), 8);
        assert!(AGENDA.iter().all(|item| item.detail.is_some()));
        assert_eq!(AGENDA[3].title, "Regressão Linear");
    }

    #[test]
    fn grades_grow_with_study_hours() {
        assert!(STUDY_HOURS_VS_GRADE
            .windows(2)
            .all(|pair| pair[0].0 < pair[1].0 && pair[0].1 < pair[1].1));
    }

    #[test]
    fn only_the_sales_forecast_is_a_regression() {
        let regressions: Vec<&str> = SCENARIOS
            .iter()
            .filter(|(_, _, answer)| answer.contains("Regressão"))
            .map(|(_, scenario, _)| *scenario)
            .collect();
        assert_eq!(
            regressions,
            ["Prever quantos produtos uma loja venderá no próximo mês"]
        );
    }

    #[test]
    fn model_guide_starts_with_the_baseline() {
        assert_eq!(MODEL_GUIDE[0].1, "Regressão Linear");
        assert!(MODEL_GUIDE[0].2.ends_with("baseline"));
    }

    #[test]
    fn exercises_are_numbered_in_order() {
        for (index, (title, _)) in EXERCISES.iter().enumerate() {
            assert!(title.starts_with(&format!("{}.", index + 1)), "{title}");
        }
    }
}
