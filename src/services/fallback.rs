//! # 内置数据
//!
//! 远程存储不可达、未配置表或返回异常数据时使用的完整数据集。
//! 内容与线上表保持同一形状，仓库层总是整表返回，从不与远程结果混合。
//!
//! 每个函数每次调用都构造一份新的 `Vec`，调用方可以自由持有所有权。

use crate::models::case_study::{CaseStudy, CaseStudyTestimonial};
use crate::models::content::{PortfolioItem, Service, ServiceCategory, Testimonial};

fn category(id: &str, slug: &str, title: &str, description: &str, icon_name: &str) -> ServiceCategory {
    ServiceCategory {
        id: id.into(),
        slug: slug.into(),
        title: title.into(),
        description: description.into(),
        icon_name: icon_name.into(),
    }
}

fn service(
    id: &str,
    category_id: &str,
    title: &str,
    short_description: &str,
    long_description: &str,
    icon_name: &str,
) -> Service {
    Service {
        id: id.into(),
        category_id: category_id.into(),
        title: title.into(),
        short_description: short_description.into(),
        long_description: long_description.into(),
        icon_name: icon_name.into(),
    }
}

/// 服务分类，按 `id` 排列，与远程查询的排序键一致
pub fn service_categories() -> Vec<ServiceCategory> {
    vec![
        category(
            "consultoria",
            "consultoria-gestao",
            "Consultoria e Gestão Estratégica",
            "Análise de negócios, planejamento estratégico e otimização de processos para impulsionar o crescimento sustentável.",
            "Briefcase",
        ),
        category(
            "infra",
            "infraestrutura-cloud",
            "Infraestrutura e Cloud",
            "Soluções de computação em nuvem, segurança de dados e infraestrutura de TI robusta e escalável para suportar seu negócio.",
            "CloudCog",
        ),
        category(
            "marketing",
            "marketing-digital",
            "Marketing Digital",
            "Estratégias completas para aumentar sua presença online, engajar seu público e gerar mais leads e vendas.",
            "Megaphone",
        ),
        category(
            "projetos",
            "gestao-projetos",
            "Gestão de Projetos",
            "Metodologias ágeis e tradicionais para garantir a entrega de projetos no prazo, escopo e orçamento definidos.",
            "ClipboardCheck",
        ),
        category(
            "software",
            "solucoes-software",
            "Soluções de Software e Inovação",
            "Desenvolvimento de software sob medida, aplicativos móveis e soluções tecnológicas inovadoras para transformar sua operação.",
            "Cpu",
        ),
    ]
}

/// 服务，按 `id` 排列（同时也按分类分组）
pub fn services() -> Vec<Service> {
    vec![
        // Marketing Digital
        service(
            "s1",
            "marketing",
            "SEO e Otimização de Sites",
            "Melhore seu ranking nos motores de busca.",
            "Análise completa de SEO on-page e off-page, pesquisa de palavras-chave, link building e otimização técnica para aumentar a visibilidade orgânica do seu site.",
            "Search",
        ),
        service(
            "s2",
            "marketing",
            "Gestão de Mídias Sociais",
            "Engaje seu público e construa sua marca.",
            "Criação de conteúdo estratégico, gerenciamento de perfis, campanhas de engajamento e monitoramento de resultados nas principais plataformas de mídia social.",
            "ThumbsUp",
        ),
        service(
            "s3",
            "marketing",
            "Marketing de Conteúdo",
            "Atraia e converta com conteúdo de valor.",
            "Planejamento, criação e distribuição de conteúdo relevante (blog posts, e-books, infográficos, vídeos) para atrair, educar e converter seu público-alvo.",
            "FileText",
        ),
        // Consultoria
        service(
            "s4",
            "consultoria",
            "Planejamento Estratégico",
            "Defina o rumo do seu negócio.",
            "Análise de mercado, definição de metas e objetivos, desenvolvimento de planos de ação e acompanhamento de KPIs para garantir o sucesso a longo prazo.",
            "Target",
        ),
        service(
            "s5",
            "consultoria",
            "Otimização de Processos",
            "Aumente a eficiência e reduza custos.",
            "Mapeamento de processos, identificação de gargalos, implementação de melhorias e automação para otimizar a operação da sua empresa.",
            "Zap",
        ),
        // Software
        service(
            "s6",
            "software",
            "Desenvolvimento Web Personalizado",
            "Sistemas e plataformas web sob medida.",
            "Criação de websites, e-commerces, sistemas web complexos e APIs utilizando as tecnologias mais modernas e adequadas às suas necessidades.",
            "Code",
        ),
        service(
            "s7",
            "software",
            "Aplicativos Móveis (iOS e Android)",
            "Leve seu negócio para o bolso do cliente.",
            "Desenvolvimento de aplicativos nativos e híbridos para iOS e Android, com foco em usabilidade, performance e design intuitivo.",
            "Smartphone",
        ),
        // Projetos
        service(
            "s8",
            "projetos",
            "Gerenciamento Ágil de Projetos (Scrum/Kanban)",
            "Entregas rápidas e adaptáveis.",
            "Implementação de metodologias ágeis como Scrum e Kanban para gerenciamento de projetos de software e outras iniciativas, garantindo flexibilidade e entregas de valor contínuas.",
            "Repeat",
        ),
        // Infraestrutura
        service(
            "s9",
            "infra",
            "Migração para Nuvem (AWS, Azure, GCP)",
            "Modernize sua infraestrutura de TI.",
            "Planejamento e execução de projetos de migração para as principais plataformas de nuvem (Amazon Web Services, Microsoft Azure, Google Cloud Platform), otimizando custos e escalabilidade.",
            "Server",
        ),
    ]
}

/// 作品集
pub fn portfolio_items() -> Vec<PortfolioItem> {
    let item = |id: &str, title: &str, description: &str, seed: &str, category: &str, link: Option<&str>| {
        PortfolioItem {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image_url: format!("https://picsum.photos/seed/{}/400/300", seed),
            category: category.into(),
            link: link.map(str::to_string),
        }
    };

    vec![
        item(
            "p1",
            "Website Institucional para TechSolutions",
            "Desenvolvimento de um website moderno e responsivo para uma empresa de tecnologia, focado em UX e geração de leads.",
            "project1",
            "Desenvolvimento Web",
            Some("#"),
        ),
        item(
            "p2",
            "Campanha de Marketing Digital para E-commerce de Moda",
            "Estratégia completa de marketing digital que resultou em aumento de 150% nas vendas online.",
            "project2",
            "Marketing Digital",
            Some("#"),
        ),
        item(
            "p3",
            "Aplicativo Móvel para Startup de Logística",
            "Criação de um aplicativo móvel inovador para otimização de rotas e acompanhamento de entregas em tempo real.",
            "project3",
            "Aplicativos Móveis",
            Some("#"),
        ),
        item(
            "p4",
            "Consultoria Estratégica para Expansão de Mercado",
            "Análise de mercado e plano de expansão para uma empresa do setor alimentício, resultando na entrada em duas novas regiões.",
            "project4",
            "Consultoria Estratégica",
            None,
        ),
    ]
}

/// 客户评价
pub fn testimonials() -> Vec<Testimonial> {
    let testimonial = |id: &str, quote: &str, author: &str, company: &str| Testimonial {
        id: id.into(),
        quote: quote.into(),
        author: author.into(),
        company: company.into(),
    };

    vec![
        testimonial(
            "t1",
            "A Delagil transformou nossa presença online! Resultados incríveis em pouco tempo.",
            "João Silva",
            "CEO da InovaTech",
        ),
        testimonial(
            "t2",
            "Profissionalismo e expertise definem a equipe Delagil. Recomendo fortemente!",
            "Maria Oliveira",
            "Diretora de Marketing da ModaStore",
        ),
        testimonial(
            "t3",
            "O novo sistema desenvolvido pela Delagil otimizou nossos processos e reduziu custos significativamente.",
            "Carlos Pereira",
            "Gerente de Operações da LogExpress",
        ),
    ]
}

/// 成功案例，每条一个不同的分类
pub fn case_studies() -> Vec<CaseStudy> {
    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    vec![
        CaseStudy {
            id: "cs1".into(),
            slug: "aumento-de-conversoes-para-e-commerce-de-moda".into(),
            title: "Aumento de 400% nas Conversões para E-commerce de Moda".into(),
            client_name: "FashionNow".into(),
            problem_statement: "O cliente enfrentava baixas taxas de conversão na loja virtual, com alto abandono de carrinho e tráfego pouco qualificado vindo das campanhas pagas.".into(),
            solution_provided: "Reestruturamos o funil de vendas, otimizamos as páginas de produto para SEO e conversão, e redesenhamos as campanhas de mídia paga com segmentação por comportamento de compra.".into(),
            results_achieved: strings(&[
                "Aumento de 400% na taxa de conversão",
                "Redução de 35% no abandono de carrinho",
                "Crescimento de 180% no tráfego orgânico em seis meses",
            ]),
            technologies_used: strings(&["Google Analytics", "Google Ads", "Meta Ads", "Hotjar"]),
            image_url: "https://picsum.photos/seed/case1/800/600".into(),
            category: "Marketing Digital".into(),
            testimonial: Some(CaseStudyTestimonial {
                quote: "A parceria com a Delagil mudou o patamar do nosso e-commerce. Em poucos meses as vendas superaram todas as nossas projeções.".into(),
                author: "Fernanda Lima, Diretora de E-commerce da FashionNow".into(),
            }),
        },
        CaseStudy {
            id: "cs2".into(),
            slug: "desenvolvimento-de-plataforma-de-gestao-logistica".into(),
            title: "Desenvolvimento de Plataforma de Gestão Logística".into(),
            client_name: "LogExpress".into(),
            problem_statement: "O controle de entregas era feito em planilhas, sem visibilidade em tempo real das rotas e com retrabalho constante entre as equipes.".into(),
            solution_provided: "Desenvolvemos uma plataforma web com roteirização automática, rastreamento em tempo real e painel de indicadores integrado ao ERP do cliente.".into(),
            results_achieved: strings(&[
                "Redução de 28% no custo por entrega",
                "Visibilidade em tempo real de 100% da frota",
                "Eliminação de 20 horas semanais de trabalho manual",
            ]),
            technologies_used: strings(&["React", "Node.js", "PostgreSQL", "Google Maps API"]),
            image_url: "https://picsum.photos/seed/case2/800/600".into(),
            category: "Desenvolvimento de Software".into(),
            testimonial: Some(CaseStudyTestimonial {
                quote: "O novo sistema nos deu controle total da operação. Hoje sabemos onde está cada entrega a qualquer momento.".into(),
                author: "Carlos Pereira, Gerente de Operações da LogExpress".into(),
            }),
        },
        CaseStudy {
            id: "cs3".into(),
            slug: "expansao-de-mercado-para-industria-alimenticia".into(),
            title: "Plano de Expansão para Indústria Alimentícia".into(),
            client_name: "Sabor do Campo".into(),
            problem_statement: "A empresa queria crescer fora do estado de origem, mas não tinha dados sobre demanda regional nem uma estrutura de distribuição preparada.".into(),
            solution_provided: "Conduzimos uma análise de mercado em cinco regiões, definimos as praças prioritárias e desenhamos o modelo de distribuição e o plano financeiro da expansão.".into(),
            results_achieved: strings(&[
                "Entrada em duas novas regiões em 12 meses",
                "Crescimento de 45% no faturamento anual",
            ]),
            technologies_used: strings(&["Power BI", "Análise SWOT", "OKRs"]),
            image_url: "https://picsum.photos/seed/case3/800/600".into(),
            category: "Consultoria Estratégica".into(),
            testimonial: None,
        },
        CaseStudy {
            id: "cs4".into(),
            slug: "aplicativo-de-agendamento-para-rede-de-clinicas".into(),
            title: "Aplicativo de Agendamento para Rede de Clínicas".into(),
            client_name: "VidaPlena Clínicas".into(),
            problem_statement: "Os agendamentos dependiam do telefone, gerando filas de atendimento e alto índice de faltas dos pacientes.".into(),
            solution_provided: "Criamos aplicativos iOS e Android com agendamento online, lembretes automáticos e confirmação de consulta integrada ao sistema das clínicas.".into(),
            results_achieved: strings(&[
                "Queda de 60% nas faltas às consultas",
                "70% dos agendamentos feitos pelo aplicativo",
            ]),
            technologies_used: strings(&["React Native", "Firebase", "Node.js"]),
            image_url: "https://picsum.photos/seed/case4/800/600".into(),
            category: "Aplicativos Móveis".into(),
            testimonial: Some(CaseStudyTestimonial {
                quote: "Nossos pacientes adoraram a praticidade e a equipe de recepção finalmente ganhou tempo para cuidar das pessoas.".into(),
                author: "Dra. Beatriz Souza, Diretora da VidaPlena Clínicas".into(),
            }),
        },
        CaseStudy {
            id: "cs5".into(),
            slug: "migracao-para-nuvem-de-fintech".into(),
            title: "Migração para Nuvem com Alta Disponibilidade".into(),
            client_name: "PayFácil".into(),
            problem_statement: "A infraestrutura própria não acompanhava o crescimento de transações e sofria com quedas em horários de pico.".into(),
            solution_provided: "Planejamos e executamos a migração para a AWS com arquitetura em múltiplas zonas, escalonamento automático e monitoramento contínuo.".into(),
            results_achieved: strings(&[
                "Disponibilidade de 99,95% após a migração",
                "Redução de 30% nos custos de infraestrutura",
            ]),
            technologies_used: strings(&["AWS", "Terraform", "Kubernetes", "Grafana"]),
            image_url: "https://picsum.photos/seed/case5/800/600".into(),
            category: "Infraestrutura e Cloud".into(),
            testimonial: None,
        },
    ]
}
