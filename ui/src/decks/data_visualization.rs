//! Aula 1: Visualização de Dados.

use dioxus::prelude::*;

use super::fragments::{
    AgendaItem, AgendaSlide, AnalysisSlide, BulletBlock, ChartKind, ChartSlide, DeckLogo,
    OverviewSlide, TitleSlide,
};
use crate::deck::SlideDeck;
use crate::quiz::{QuizCard, QuizOption, QuizQuestion};

pub static WHAT_IS_DATA: QuizQuestion = QuizQuestion {
    id: "dv-what-is-data",
    title: "Afinal, o que são dados?",
    prompt: None,
    options: &[
        (QuizOption::A, "Dados são números e textos sem significado"),
        (QuizOption::B, "Dados são informações estruturadas e processáveis"),
        (QuizOption::C, "Dados são apenas gráficos e tabelas"),
        (QuizOption::D, "Dados são apenas imagens e vídeos"),
    ],
    correct: QuizOption::B,
    explanation: "Dados são informações estruturadas e processáveis, fundamentais para análise e tomada de decisão.",
    correction: "Dados vão além de números e gráficos; eles representam informações que podem ser analisadas e interpretadas.",
};

pub static PANDAS_SERIES_VS_DATAFRAME: QuizQuestion = QuizQuestion {
    id: "dv-pandas-series-dataframe",
    title: "Revisão: Pandas",
    prompt: Some(
        "Relembrando da aula passada: Qual a principal diferença entre Series e DataFrame no pandas?",
    ),
    options: &[
        (
            QuizOption::A,
            "Series é para dados textuais, DataFrame é para dados numéricos",
        ),
        (
            QuizOption::B,
            "Series é unidimensional (1D), DataFrame é bidimensional (2D)",
        ),
        (QuizOption::C, "Series não tem índices, DataFrame tem índices"),
        (
            QuizOption::D,
            "Series é para análise estatística, DataFrame é para visualização",
        ),
    ],
    correct: QuizOption::B,
    explanation: "Series é uma estrutura unidimensional similar a um array ou lista, enquanto DataFrame é uma estrutura tabular bidimensional com linhas e colunas, como uma planilha ou tabela SQL. Vale lembrar também que, quando combinamos os índices de um Series, formamos um dataframe.",
    correction: "Ambos Series e DataFrame podem conter qualquer tipo de dado. A diferença principal é que Series é uma estrutura unidimensional (como uma coluna), enquanto DataFrame é bidimensional (linhas e colunas).",
};

pub static QUESTIONS: [&QuizQuestion; 2] = [&WHAT_IS_DATA, &PANDAS_SERIES_VS_DATAFRAME];

const AGENDA: &[AgendaItem] = &[
    AgendaItem { icon: "📊", title: "O que é Visualização de Dados?", detail: None },
    AgendaItem { icon: "🎯", title: "Por que visualizar dados?", detail: None },
    AgendaItem { icon: "🧩", title: "Conceitos fundamentais", detail: None },
    AgendaItem { icon: "📈", title: "Tipos de visualizações", detail: None },
    AgendaItem { icon: "🔍", title: "Análise univariada", detail: None },
    AgendaItem { icon: "🔗", title: "Análise bivariada", detail: None },
    AgendaItem { icon: "🚀", title: "Conclusões e próximos passos", detail: None },
];

/// (icon, headline, detail) for "Por que visualizar dados?".
const REASONS: &[(&str, &str, &str)] = &[
    (
        "📊",
        "Transformar números em insights compreensíveis",
        "Visualizações facilitam a interpretação de grandes volumes de dados",
    ),
    (
        "🔎",
        "Identificar padrões e anomalias nos dados",
        "Permite descobrir tendências e outliers que passariam despercebidos em análises tabulares",
    ),
    (
        "🧪",
        "Detectar problemas e vieses antes da modelagem",
        "Identificação precoce de questões que poderiam comprometer análises futuras",
    ),
    (
        "📣",
        "Comunicar resultados de forma eficaz",
        "Transmitir insights complexos para stakeholders de forma acessível e persuasiva",
    ),
    (
        "🔄",
        "Etapa essencial em projetos de IA e ciência de dados",
        "Componente crítico do ciclo de vida da análise de dados e desenvolvimento de modelos",
    ),
];

pub const DATASET_URL: &str =
    "https://www.kaggle.com/datasets/jayaantanaath/student-habits-vs-academic-performance";

const UNIVARIATE: &[ChartKind] = &[
    ChartKind { icon: "📊", title: "Distribuição", examples: "Histogramas, Densidade, Box plots" },
    ChartKind { icon: "📈", title: "Contagem", examples: "Gráficos de barras, Gráficos de pizza" },
    ChartKind { icon: "🔍", title: "Tendência", examples: "Gráficos de linha ao longo do tempo" },
];

const BIVARIATE: &[ChartKind] = &[
    ChartKind { icon: "📊", title: "Scatter Plot", examples: "Relação entre variáveis numéricas" },
    ChartKind { icon: "🔄", title: "Correlação", examples: "Força e direção da relação" },
    ChartKind { icon: "📈", title: "Séries Temporais", examples: "Evolução de variáveis ao longo do tempo" },
];

pub const HISTOGRAM_CODE: &str = r#"
import pandas as pd
df = pd.read_csv('/content/student_habits_performance.csv')
df.plot.hist(y='sleep_hours', bins=10, edgecolor='black')
"#;

pub const BOXPLOT_CODE: &str = r#"
import pandas as pd
df = pd.read_csv('/content/student_habits_performance.csv')
df.plot.box(y='sleep_hours')
"#;

pub const GENDER_BAR_CODE: &str = r#"
import pandas as pd
df = pd.read_csv('/content/student_habits_performance.csv')
df['gender'].value_counts().plot.bar()
"#;

pub const INTERNET_BAR_CODE: &str = r#"
import pandas as pd
df = pd.read_csv('/content/student_habits_performance.csv')
df.groupby('internet_quality')['exam_score'].mean().plot.bar()
"#;

pub const PIE_CODE: &str = r#"
import pandas as pd
df = pd.read_csv('/content/student_habits_performance.csv')
df['internet_quality'].value_counts().plot.pie(autopct='%1.1f%%', startangle=90, colors=['#FF6384', '#36A2EB', '#FFCE56'])
"#;

pub const DENSITY_CODE: &str = r#"
import pandas as pd
df = pd.read_csv('/content/student_habits_performance.csv')
df['sleep_hours'].plot.kde(bw_method=0.5, color='blue', linewidth=2)
"#;

pub const SCATTER_CODE: &str = r#"
import pandas as pd
df = pd.read_csv('/content/student_habits_performance.csv')
df.plot.scatter(x='study_hours', y='exam_score', alpha=0.5, color='blue', s=50, edgecolor='black')
"#;

pub const CORRELATION_CODE: &str = r#"
import pandas as pd

df = pd.read_csv('/content/student_habits_performance.csv')
correlation_matrix = df.corr()
import seaborn as sns
import matplotlib.pyplot as plt
plt.figure(figsize=(10, 8))
sns.heatmap(correlation_matrix, annot=True, cmap='coolwarm', fmt='.2f', square=True, cbar_kws={"shrink": .8})
plt.title('Matriz de Correlação')
plt.show()
"#;

pub const TIME_SERIES_CODE: &str = r#"
import pandas as pd

df = pd.read_csv('/content/air_quality_data.csv')
df["DateTime"] = pd.to_datetime(df["Date"] + ' ' + df["Time"])

df.groupby(df["DateTime"].dt.date).agg({'PM10': 'mean'}).plot(title='Média diária de NO2 e PM10', xlabel='Data', ylabel='Concentração (µg/m³)', figsize=(12, 6))
"#;

/// Listings shown on the implementation slides, in deck order.
pub const CODE_SAMPLES: [&str; 9] = [
    HISTOGRAM_CODE,
    BOXPLOT_CODE,
    GENDER_BAR_CODE,
    INTERNET_BAR_CODE,
    PIE_CODE,
    DENSITY_CODE,
    SCATTER_CODE,
    CORRELATION_CODE,
    TIME_SERIES_CODE,
];

const KEY_QUESTIONS: &[&str] = &[
    "O que os dados estão me mostrando?",
    "Existem padrões inesperados?",
    "Quais são os outliers e por quê?",
    "Como isso impacta o negócio?",
    "Que ações posso tomar?",
];

#[component]
pub fn DataVisualizationDeck() -> Element {
    rsx! {
        SlideDeck { title: "Visualização de Dados",
            TitleSlide {
                title: "Visualização de Dados",
                subtitle: "Transformando dados em insights visuais",
            }

            AgendaSlide { items: AGENDA }

            section { class: "slide",
                h2 { class: "slide__title", "Por que visualizar dados?" }
                ul { class: "slide__reasons",
                    for (icon, headline, detail) in REASONS.iter() {
                        li { key: "{headline}", class: "slide__reason",
                            div { class: "slide__reason-icon", "{icon}" }
                            div {
                                strong { "{headline}" }
                                p { "{detail}" }
                            }
                        }
                    }
                }
            }

            section { class: "slide slide--quiz",
                QuizCard { question: &WHAT_IS_DATA }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Tipos de Dados na Visualização" }
                p { class: "slide__lead",
                    "Entender os diferentes tipos de dados é fundamental para escolher as visualizações mais adequadas e extrair insights valiosos."
                }
                div { class: "slide__cards",
                    div { class: "slide__card slide__card--blue fragment fade-up",
                        div { class: "slide__card-icon", "📋" }
                        h3 { "Dados Qualitativos" }
                        p { "Categorias, textos e atributos não numéricos" }
                    }
                    div {
                        class: "slide__card slide__card--green fragment fade-up",
                        "data-fragment-index": "1",
                        div { class: "slide__card-icon", "📊" }
                        h3 { "Dados Quantitativos" }
                        p { "Valores numéricos, medições e contagens" }
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Dados Qualitativos / Categóricos" }
                p { class: "slide__lead",
                    "Dados que expressam "
                    strong { "características" }
                    " ou "
                    strong { "atributos" }
                    " que não podem ser medidos numericamente."
                }
                div { class: "slide__columns",
                    div { class: "slide__column",
                        h4 { "Características" }
                        ul {
                            li { "○ Expressos como texto ou categorias" }
                            li { "○ " strong { "Nominais" } ": sem ordem (cor, gênero)" }
                            li { "○ " strong { "Ordinais" } ": com ordem (ruim, bom, ótimo)" }
                        }
                    }
                    div { class: "slide__column",
                        h4 { "Exemplos" }
                        ul {
                            li { "○ Categorias: Gênero, Estado civil, Região" }
                            li { "○ Textos: Comentários, Avaliações, Descrições" }
                            li { "○ Escalas: Péssimo → Excelente" }
                        }
                    }
                }
                div { class: "slide__figure",
                    img {
                        src: "https://blog.olyng.com/assets/images/uploads/dados-qualitativos.png",
                        alt: "Exemplo de Dados Qualitativos",
                    }
                }
                div { class: "slide__note fragment fade-in",
                    p {
                        strong { "Processamento:" }
                        " Para uso em modelos de ML, dados qualitativos precisam ser transformados em representações numéricas (ex: "
                        i { "one-hot encoding" }
                        ", "
                        i { "embeddings" }
                        ")."
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Dados Quantitativos / Numéricos" }
                p { class: "slide__lead",
                    "Dados que expressam "
                    strong { "quantidades" }
                    " ou "
                    strong { "medidas" }
                    " que podem ser representados numericamente."
                }
                div { class: "slide__columns",
                    div { class: "slide__column",
                        h4 { "Características" }
                        ul {
                            li { "○ Podem ser medidos e contados" }
                            li { "○ " strong { "Discretos" } ": valores inteiros contáveis (quantidade de pessoas)" }
                            li { "○ " strong { "Contínuos" } ": valores em uma escala contínua (altura, temperatura)" }
                        }
                    }
                    div { class: "slide__column",
                        h4 { "Exemplos" }
                        ul {
                            li { "○ Medições: Altura, Peso, Temperatura" }
                            li { "○ Contagens: Número de clientes, Frequência" }
                            li { "○ Valores: Preço, Tempo decorrido, Idade" }
                        }
                    }
                }
                div { class: "slide__figure",
                    img {
                        src: "https://blog.olyng.com/assets/images/uploads/dados-quantitativos.png",
                        alt: "Exemplo de Dados Quantitativos",
                    }
                }
                div { class: "slide__note fragment fade-in",
                    p {
                        strong { "Análise:" }
                        " Dados quantitativos permitem análises estatísticas como média, mediana, desvio padrão e correlações. Essenciais para modelagem preditiva e inferência estatística."
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Resumão" }
                p { class: "slide__source", strong { "Distribuição de dados:" } }
                img {
                    class: "slide__image slide__image--half",
                    src: "https://www.computersciencemaster.com.br/wp-content/uploads/2021/03/variaveis.jpg",
                    alt: "Exemplo de Dados Quantitativos",
                }
                p { class: "slide__source", "Fonte: Computer Science Master" }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Estruturas de Dados" }
                p { class: "slide__lead",
                    "Além do tipo, os dados podem ser classificados conforme sua "
                    strong { "estrutura" }
                    " e "
                    strong { "organização" }
                    "."
                }
                div { class: "slide__bands",
                    div { class: "slide__band slide__band--blue fragment fade-up",
                        h4 { "Dados Estruturados" }
                        p {
                            "Formato rígido e bem definido. "
                            strong { "Exemplos:" }
                            " Planilhas, bancos de dados SQL, CSV."
                            span { class: "slide__band-detail",
                                "São os mais fáceis de processar e analisar. Organizados em linhas e colunas com tipos de dados consistentes."
                            }
                        }
                    }
                    div { class: "slide__band slide__band--purple fragment fade-up",
                        h4 { "Dados Semi-estruturados" }
                        p {
                            "Não possuem formato rígido, mas têm elementos organizacionais. "
                            strong { "Exemplos:" }
                            " JSON, XML, HTML."
                            span { class: "slide__band-detail",
                                "Possuem tags ou marcadores que facilitam a interpretação, permitem hierarquia e relações flexíveis."
                            }
                        }
                    }
                    div { class: "slide__band slide__band--green fragment fade-up",
                        h4 { "Dados Não-estruturados" }
                        p {
                            "Sem estrutura formal definida. "
                            strong { "Exemplos:" }
                            " Imagens, vídeos, áudios, textos livres."
                            span { class: "slide__band-detail",
                                "Representam a maior parte dos dados gerados atualmente. Requerem técnicas avançadas de processamento."
                            }
                        }
                    }
                }
                div { class: "slide__callout fragment fade-in",
                    p {
                        strong { "Desafio:" }
                        " Grande parte do trabalho em ciência de dados envolve transformar dados não-estruturados em formatos estruturados para análise e modelagem."
                    }
                }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Imagem de exemplo" }
                div { class: "slide__figure slide__figure--tall",
                    img {
                        src: "https://static.wixstatic.com/media/c10b0b_68fa8fa7ce76416ca72234747a0b73c2~mv2.png/v1/fit/w_1000,h_1000,al_c,q_80/file.jpg",
                        alt: "Imagem mostrando diferentes tipos de dados",
                    }
                    p { class: "slide__source", "Fonte: Dataside" }
                }
            }

            section { class: "slide slide--quiz",
                QuizCard { question: &PANDAS_SERIES_VS_DATAFRAME }
            }

            section { class: "slide",
                h3 { class: "slide__title", "Antes... Um pouquinho de estatística" }
                h6 { "Vamos para a lousa" }
            }

            section { class: "slide",
                h2 { class: "slide__title", "Dataset da aula de hoje" }
                p { class: "slide__lead",
                    "Nesta aula, vamos trabalhar com o dataset de perfomance de alunos baseado no seu tempo de estudo e uso de redes sociais."
                }
                a {
                    class: "slide__button",
                    href: DATASET_URL,
                    target: "_blank",
                    "ACESSAR DATASET"
                }
            }

            OverviewSlide {
                title: "Análise Univariada",
                lead: "Análise de uma única variável por vez para entender sua distribuição e características.",
                kinds: UNIVARIATE,
            }

            AnalysisSlide {
                title: "Histograma",
                image_url: "https://leansixsigmabrasil.com.br/site/wp-content/uploads/2020/01/Exemplo-de-histograma-de-temperatura.jpg",
                image_caption: "Exemplo de histograma. Fonte: Lean Six Sigma Brasil",
                h3 { "O que é um Histograma?" }
                p {
                    "Um histograma é uma representação gráfica da "
                    strong { "distribuição de frequência" }
                    " de dados numéricos contínuos."
                }
                BulletBlock {
                    heading: "Características:",
                    items: &[
                        "Divida os dados em intervalos (bins)",
                        "Conta quantos valores caem em cada intervalo",
                        "Altura das barras representa a frequência",
                    ],
                }
                BulletBlock {
                    heading: "Quando usar:",
                    items: &[
                        "Para entender a distribuição de dados numéricos",
                        "Para identificar assimetrias e multimodalidade",
                        "Para detectar outliers",
                    ],
                }
            }

            ChartSlide {
                title: "Histograma - Implementação",
                code: HISTOGRAM_CODE,
                caption: "Exemplo de histograma em Python. Fonte: Material da aula",
            }

            AnalysisSlide {
                title: "Box Plot",
                image_url: "https://miro.medium.com/v2/resize:fit:1400/1*2c21SkzJMf3frPXPAR_gZA.png",
                image_caption: "Anatomia de um Box Plot. Fonte: Towards Data Science",
                h3 { "O que é um Box Plot?" }
                p {
                    "Um box plot (ou diagrama de caixa) é uma representação gráfica da "
                    strong { "distribuição estatística" }
                    " dos dados através de quartis."
                }
                h4 { class: "analysis__heading", "Elementos principais:" }
                ul { class: "analysis__bullets",
                    li { "• " strong { "Caixa central:" } " representa o intervalo interquartil (Q1 a Q3)" }
                    li { "• " strong { "Linha central:" } " mediana (Q2)" }
                    li { "• " strong { "Bigodes:" } " extensão dos dados até 1.5 * IQR" }
                    li { "• " strong { "Pontos:" } " outliers (valores além dos bigodes)" }
                }
                BulletBlock {
                    heading: "Quando usar:",
                    items: &[
                        "Para comparar distribuições entre grupos",
                        "Para identificar assimetria",
                        "Para detectar e visualizar outliers",
                    ],
                }
            }

            ChartSlide {
                title: "Box Plot - Implementação",
                code: BOXPLOT_CODE,
                caption: "Exemplo de boxplots comparando grupos. Fonte: Material da aula",
            }

            AnalysisSlide {
                title: "Gráfico de Barras",
                image_url: "https://www.hashtagtreinamentos.com/wp-content/uploads/2020/10/Grafico-de-Barras-12.png",
                image_caption: "Exemplo de gráfico de barras. Fonte: Chartio",
                h3 { "O que é um Gráfico de Barras?" }
                p {
                    "Um gráfico de barras representa dados categóricos com barras retangulares, onde o comprimento é proporcional ao valor que representam."
                }
                BulletBlock {
                    heading: "Características:",
                    items: &[
                        "Compara valores entre diferentes categorias",
                        "Pode ser vertical (barras) ou horizontal (barras horizontais)",
                        "Pode exibir contagens, frequências ou outros valores agregados",
                    ],
                }
                BulletBlock {
                    heading: "Quando usar:",
                    items: &[
                        "Para comparar valores entre categorias distintas",
                        "Para mostrar distribuição de dados categóricos",
                        "Quando a ordem das barras pode transmitir informação adicional",
                    ],
                }
            }

            ChartSlide {
                title: "Gráfico de Barras - Implementação",
                code: GENDER_BAR_CODE,
                caption: "Exemplo de gráfico de barras em Python. Fonte: Material da aula",
            }

            ChartSlide {
                title: "Gráfico de Barras - Implementação",
                code: INTERNET_BAR_CODE,
                caption: "Exemplo de gráfico de barras em Python. Fonte: Material da aula",
            }

            AnalysisSlide {
                title: "Gráfico de Pizza",
                image_url: "https://andersonmdcanteli.github.io/images/curso-matplotlib/grafico-pizza/74/grafico-pizza-02.png",
                image_caption: "Exemplo de gráfico de pizza. Fonte: Jotform",
                h3 { "O que é um Gráfico de Pizza?" }
                p {
                    "Um gráfico de pizza (ou gráfico circular) divide um círculo em fatias para ilustrar proporções numéricas ou porcentagens de um todo."
                }
                BulletBlock {
                    heading: "Características:",
                    items: &[
                        "Cada fatia representa uma categoria",
                        "O tamanho da fatia corresponde à proporção do valor",
                        "A soma de todas as fatias representa 100% do total",
                    ],
                }
                h4 { class: "analysis__heading", "Quando usar (com cautela):" }
                ul { class: "analysis__bullets",
                    li { "• Para mostrar a composição de um todo" }
                    li { "• Quando há poucas categorias (idealmente menos de 6)" }
                    li {
                        "• "
                        strong { "Observação:" }
                        " Especialistas em dados geralmente preferem gráficos de barras, que permitem comparações mais precisas"
                    }
                }
            }

            ChartSlide {
                title: "Gráfico de Pizza - Implementação",
                code: PIE_CODE,
                caption: "Exemplo de gráfico de pizza em Python. Fonte: Matplotlib",
            }

            AnalysisSlide {
                title: "Gráfico de Densidade",
                image_url: "https://miro.medium.com/v2/resize:fit:1400/0*n07oUTuHYMboQi5r",
                image_caption: "Exemplo de gráfico de densidade. Fonte: Seaborn",
                h3 { "O que é um Gráfico de Densidade?" }
                p {
                    "Um gráfico de densidade (ou KDE - Kernel Density Estimation) mostra a distribuição de uma variável contínua como uma curva suave."
                }
                BulletBlock {
                    heading: "Características:",
                    items: &[
                        "Versão suavizada de um histograma",
                        "Mostra onde os valores estão concentrados",
                        "Permite identificar multimodalidade (múltiplos picos)",
                    ],
                }
                BulletBlock {
                    heading: "Quando usar:",
                    items: &[
                        "Para visualizar distribuições contínuas de forma suave",
                        "Para comparar distribuições de diferentes grupos",
                        "Quando um histograma parece \"ruidoso\" ou irregular",
                    ],
                }
            }

            ChartSlide {
                title: "Gráfico de Densidade - Implementação",
                code: DENSITY_CODE,
                caption: "Exemplo de gráficos de densidade em Python. Fonte: Seaborn",
            }

            section { class: "slide",
                h2 { class: "slide__title", "Interpretação do gráfico de densidade e histograma" }
                div { class: "slide__gallery",
                    figure {
                        img {
                            src: "https://blog.proffernandamaciel.com.br/wp-content/uploads/2022/02/modalidade.jpeg",
                            alt: "Modalidade",
                        }
                        figcaption { class: "slide__source", "Fonte: Blog do Professor Fernando Maciel" }
                    }
                    figure {
                        img {
                            src: "https://i0.wp.com/content.dynamox.net/wp-content/uploads/2023/03/skewness.webp?resize=750%2C326&ssl=1",
                            alt: "Assimetria",
                        }
                        figcaption { class: "slide__source", "Fonte: Dynamox" }
                    }
                }
            }

            OverviewSlide {
                title: "Análise Bivariada",
                lead: "Análise da relação entre duas variáveis, identificando padrões, tendências e correlações.",
                kinds: BIVARIATE,
            }

            AnalysisSlide {
                title: "Scatter Plot (Gráfico de Dispersão)",
                image_url: "https://blogger.googleusercontent.com/img/b/R29vZ2xl/AVvXsEh6J_McAL09Cj_BwC_cbSCGlPtNFvFAPVW_qzA2QMdVCp0tovVzFd-GgFiHiwVxOGrApcrL4-3HZB-AKQVQ-DuAww07luGfTOcaREyq3tow8XRROJiBpa0oWeilKvFOfGhuh1ZSenWlz09F/s1600/dispersao+peso+x+alt.png",
                image_caption: "Exemplo de scatter plot mostrando correlações. Fonte: SabherMed",
                h3 { "O que é um Scatter Plot?" }
                p {
                    "Um gráfico de dispersão mostra a relação entre duas variáveis numéricas, exibindo pontos onde cada coordenada corresponde aos valores das variáveis."
                }
                BulletBlock {
                    heading: "Características:",
                    items: &[
                        "Cada ponto representa uma observação/registro",
                        "Posição no eixo X e Y mostra os valores das duas variáveis",
                        "Padrão dos pontos revela relações (linear, não-linear)",
                        "Pode incorporar uma terceira variável via cor ou tamanho dos pontos",
                    ],
                }
                BulletBlock {
                    heading: "Quando usar:",
                    items: &[
                        "Para investigar relações entre variáveis numéricas",
                        "Para identificar correlações e tendências",
                        "Para detectar clusters e outliers",
                    ],
                }
            }

            ChartSlide {
                title: "Scatter Plot - Implementação",
                code: SCATTER_CODE,
                caption: "Exemplo de scatter plot com múltiplas variáveis. Fonte: Seaborn",
            }

            AnalysisSlide {
                title: "Matriz de Correlação",
                image_url: "https://miro.medium.com/v2/resize:fit:853/1*qos4XleVY1X1RevkjjS2uA.png",
                image_caption: "Exemplo de matriz de correlação. Fonte: Medium",
                h3 { "O que é uma Matriz de Correlação?" }
                p {
                    "Uma matriz de correlação mostra os coeficientes de correlação entre múltiplas variáveis, geralmente visualizada como um heatmap."
                }
                BulletBlock {
                    heading: "Características:",
                    items: &[
                        "Tabela quadrada com variáveis nas linhas e colunas",
                        "Valores variam de -1 (correlação negativa perfeita) a 1 (correlação positiva perfeita)",
                        "0 indica ausência de correlação linear",
                        "Visualizada como heatmap com escala de cores",
                    ],
                }
                BulletBlock {
                    heading: "Quando usar:",
                    items: &[
                        "Para identificar relações entre múltiplas variáveis simultaneamente",
                        "Para detectar multicolinearidade em análise preditiva",
                        "Para guiar seleção de variáveis em modelos",
                    ],
                }
            }

            ChartSlide {
                title: "Matriz de Correlação - Implementação",
                code: CORRELATION_CODE,
                caption: "Exemplo de matriz de correlação visualizada como heatmap. Fonte: Seaborn",
            }

            AnalysisSlide {
                title: "Séries Temporais",
                image_url: "https://mariofilho.com/img/guia_ts/0.png",
                image_caption: "Exemplo de visualização de séries temporais. Fonte: Mario Filho",
                h3 { "O que são Gráficos de Séries Temporais?" }
                p {
                    "Visualizações que mostram a evolução de uma ou mais variáveis ao longo do tempo, permitindo identificar padrões temporais, tendências e sazonalidades."
                }
                BulletBlock {
                    heading: "Características:",
                    items: &[
                        "Tempo no eixo X, variável(is) no eixo Y",
                        "Pontos conectados por linhas para mostrar a continuidade",
                        "Podem mostrar múltiplas séries para comparação",
                        "Permitem identificar componentes: tendência, sazonalidade, ciclos, ruído",
                    ],
                }
                BulletBlock {
                    heading: "Quando usar:",
                    items: &[
                        "Para analisar dados que evoluem no tempo",
                        "Para detectar padrões sazonais",
                        "Para identificar pontos de mudança e anomalias",
                        "Para prever tendências futuras",
                    ],
                }
            }

            ChartSlide {
                title: "Séries Temporais - Implementação",
                code: TIME_SERIES_CODE,
                caption: "Exemplo de visualização de séries temporais. Fonte: Matplotlib",
            }

            section { class: "slide",
                h2 { class: "slide__title", "Transformando Visualizações em Insights" }
                div { class: "slide__grid-2",
                    div {
                        h3 { class: "slide__accent", "🎯 Perguntas-Chave" }
                        ul { class: "slide__list",
                            for question in KEY_QUESTIONS.iter() {
                                li { key: "{question}", "{question}" }
                            }
                        }
                    }
                    div { class: "slide__quote",
                        div { class: "slide__emoji slide__emoji--huge", "💡" }
                        p {
                            "\"Dados sem insights são apenas números."
                            br {}
                            "Insights sem ação são apenas curiosidades.\""
                        }
                    }
                }
            }

            section {
                class: "slide slide--closing",
                "data-background": "linear-gradient(to bottom right, #f5f7fa, #e4eff9)",
                h2 { class: "slide__title", "Recursos & Próximos Passos" }
                div { class: "slide__columns",
                    div { class: "slide__column",
                        h3 { class: "slide__accent", "Recursos Úteis" }
                        ul {
                            li {
                                strong { "Docs:" }
                                a { href: "https://matplotlib.org/", target: "_blank", "Matplotlib" }
                                ","
                                a { href: "https://seaborn.pydata.org/", target: "_blank", "Seaborn" }
                            }
                            li {
                                strong { "Datasets:" }
                                a { href: "https://www.kaggle.com/datasets", target: "_blank", "Kaggle" }
                                ","
                                a { href: "https://data.gov/", target: "_blank", "Data.gov" }
                            }
                        }
                    }
                    div { class: "slide__column",
                        h3 { class: "slide__accent", "🚀 Próximos Passos" }
                        ul {
                            li { "✅ Aprender técnicas avançadas de visualização de dados multidimensionais" }
                        }
                    }
                }
                div { class: "slide__divider" }
                div { class: "slide__farewell",
                    div {
                        h2 { "Obrigado!" }
                        p { "Alguma pergunta?" }
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
    use crate::quiz::{Feedback, QuizState};

    #[test]
    fn every_question_offers_all_four_options() {
        for question in QUESTIONS {
            let offered: Vec<QuizOption> = question.options.iter().map(|(option, _)| *option).collect();
            assert_eq!(offered, QuizOption::ALL, "{}", question.id);
        }
    }

    #[test]
    fn question_ids_are_unique() {
        let mut ids: Vec<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn pandas_review_expects_dimensionality() {
        let question = &PANDAS_SERIES_VS_DATAFRAME;
        let mut state = QuizState::new();
        state.select(QuizOption::C);
        assert_eq!(question.feedback_for(&state), Feedback::Incorrect);
        state.select(QuizOption::B);
        assert_eq!(question.feedback_for(&state), Feedback::Correct);
        assert!(question.explanation.starts_with("Series é uma estrutura unidimensional"));
    }

    #[test]
    fn quizzes_keep_independent_state() {
        let mut what_is_data = QuizState::new();
        let pandas = QuizState::new();
        what_is_data.select(QuizOption::B);
        assert_eq!(WHAT_IS_DATA.feedback_for(&what_is_data), Feedback::Correct);
        assert_eq!(PANDAS_SERIES_VS_DATAFRAME.feedback_for(&pandas), Feedback::NoFeedback);
    }

    #[test]
    fn student_dataset_listings_read_the_same_csv() {
        for code in &CODE_SAMPLES[..8] {
            assert!(code.trim().starts_with("import pandas as pd"));
            assert!(code.contains("student_habits_performance.csv"), "{code}");
        }
        assert!(TIME_SERIES_CODE.contains("air_quality_data.csv"));
    }

    #[test]
    fn agenda_follows_the_lecture() {
        assert_eq!(AGENDA.len(), 7);
        assert_eq!(AGENDA[0].title, "O que é Visualização de Dados?");
        assert_eq!(AGENDA[6].title, "Conclusões e próximos passos");
    }
}
