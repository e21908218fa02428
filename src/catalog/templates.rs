//! Service template catalogue
//!
//! Content authored once, by hand, for the flagship city. Long descriptions
//! mention the flagship city literally so the synthesizer can retarget them;
//! sections, process steps and FAQs are written city-agnostic.

use super::{ServiceTemplate, TemplateLocale};

pub const BUILTIN: &[ServiceTemplate] = &[
    ServiceTemplate {
        id: "accidentes-trafico",
        es: TemplateLocale {
            name: "Abogados de accidentes de tráfico",
            description: "Reclamamos la indemnización que te corresponde tras un accidente de tráfico, sin adelantar honorarios.",
            long_description: "Nuestro despacho de abogados de accidentes de tráfico en Murcia lleva más de veinte años defendiendo a víctimas frente a las aseguradoras. Si has sufrido un accidente en Murcia o en cualquier punto de la Región, estudiamos tu caso sin coste y calculamos la indemnización según el baremo vigente.",
            sections: &[
                ("¿Qué indemnización me corresponde?", "La cuantía depende de los días de baja, las secuelas y los perjuicios económicos. Aplicamos el baremo de tráfico actualizado y reclamamos también los gastos médicos y de desplazamiento."),
                ("No aceptes la primera oferta", "Las aseguradoras suelen ofrecer cantidades inferiores a las que fija el baremo. Revisamos cualquier oferta motivada antes de que la firmes."),
            ],
            process: &[
                "Consulta gratuita y análisis del atestado.",
                "Recopilación de informes médicos y periciales.",
                "Reclamación extrajudicial a la aseguradora.",
                "Demanda judicial si la oferta no es justa.",
                "Cobro de la indemnización.",
            ],
            faqs: &[
                ("¿Cuánto tiempo tengo para reclamar?", "Por regla general, un año desde el alta médica para la vía civil."),
                ("¿Tengo que pagar algo por adelantado?", "No. Solo cobramos un porcentaje si obtenemos indemnización."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Car accident lawyers",
            description: "We claim the compensation you are owed after a traffic accident, with no upfront fees.",
            long_description: "Our car accident law firm in Murcia has defended victims against insurance companies for over twenty years. If you were injured in Murcia or anywhere in the region, we review your case for free and calculate your compensation under the current scale.",
            sections: &[
                ("How much compensation can I get?", "It depends on sick leave, lasting injuries and financial losses. We apply the current traffic compensation scale and also claim medical and travel expenses."),
                ("Do not accept the first offer", "Insurers often offer less than the scale sets. We review any reasoned offer before you sign it."),
            ],
            process: &[
                "Free consultation and police report review.",
                "Gathering medical and expert reports.",
                "Out-of-court claim against the insurer.",
                "Lawsuit if the offer is not fair.",
                "Payment of compensation.",
            ],
            faqs: &[
                ("How long do I have to file a claim?", "As a rule, one year from medical discharge for civil claims."),
                ("Do I have to pay anything upfront?", "No. We only charge a percentage if you are compensated."),
            ],
        }),
    },
    ServiceTemplate {
        id: "accidentes-laborales",
        es: TemplateLocale {
            name: "Abogados de accidentes laborales",
            description: "Defendemos a trabajadores lesionados en su puesto de trabajo y reclamamos prestaciones e indemnizaciones.",
            long_description: "Somos abogados especialistas en accidentes laborales en Murcia. Asesoramos a trabajadores de Murcia y su comarca para reconocer la contingencia profesional, el recargo de prestaciones y la indemnización por daños.",
            sections: &[
                ("Accidente in itinere", "El accidente sufrido en el trayecto habitual entre el domicilio y el trabajo también es accidente laboral."),
                ("Recargo de prestaciones", "Si la empresa incumplió las medidas de seguridad, las prestaciones pueden incrementarse entre un 30% y un 50%."),
            ],
            process: &[
                "Estudio del parte de accidente.",
                "Reclamación ante la mutua o el INSS.",
                "Demanda ante el Juzgado de lo Social.",
            ],
            faqs: &[
                ("¿Me pueden despedir estando de baja?", "Un despido motivado por la baja puede declararse nulo."),
                ("¿Qué es una incapacidad permanente?", "Es la prestación que se reconoce cuando las secuelas reducen o anulan la capacidad para trabajar."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Workplace accident lawyers",
            description: "We defend workers injured on the job and claim benefits and compensation.",
            long_description: "We are workplace accident lawyers in Murcia. We advise workers in Murcia and the surrounding area on recognition of occupational injury, benefit surcharges and damages.",
            sections: &[
                ("Commuting accidents", "An accident on the usual route between home and work also counts as a workplace accident."),
                ("Benefit surcharge", "If the employer breached safety rules, benefits can increase by 30% to 50%."),
            ],
            process: &[
                "Review of the accident report.",
                "Claim before the mutual insurer or Social Security.",
                "Lawsuit before the Labour Court.",
            ],
            faqs: &[
                ("Can I be dismissed while on sick leave?", "A dismissal motivated by sick leave may be declared void."),
                ("What is permanent disability?", "A benefit granted when lasting injuries reduce or remove your ability to work."),
            ],
        }),
    },
    ServiceTemplate {
        id: "negligencias-medicas",
        es: TemplateLocale {
            name: "Abogados de negligencias médicas",
            description: "Reclamamos por errores médicos en la sanidad pública y privada.",
            long_description: "Nuestros abogados de negligencias médicas en Murcia trabajan con peritos médicos independientes para acreditar la mala praxis. Hemos llevado reclamaciones contra hospitales públicos y clínicas privadas de Murcia con resultados favorables para nuestros clientes.",
            sections: &[
                ("¿Qué es una negligencia médica?", "Es la actuación sanitaria que se aparta de la lex artis y causa un daño al paciente."),
                ("Sanidad pública o privada", "Contra la sanidad pública se reclama por responsabilidad patrimonial; contra la privada, por la vía civil."),
            ],
            process: &[
                "Solicitud de la historia clínica.",
                "Informe pericial médico.",
                "Reclamación administrativa o civil.",
                "Procedimiento judicial.",
            ],
            faqs: &[
                ("¿Cuál es el plazo para reclamar?", "Un año en la sanidad pública desde la curación o estabilización de las secuelas."),
                ("¿Necesito un perito?", "Sí, el informe pericial es la prueba clave en estos procedimientos."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Medical malpractice lawyers",
            description: "We bring claims for medical errors in public and private healthcare.",
            long_description: "Our medical malpractice lawyers in Murcia work with independent medical experts to prove malpractice. We have brought claims against public hospitals and private clinics in Murcia with favourable results for our clients.",
            sections: &[
                ("What is medical malpractice?", "Healthcare that departs from accepted medical practice and harms the patient."),
                ("Public or private healthcare", "Public healthcare claims follow the state liability route; private ones go through the civil courts."),
            ],
            process: &[
                "Request for medical records.",
                "Medical expert report.",
                "Administrative or civil claim.",
                "Court proceedings.",
            ],
            faqs: &[
                ("What is the deadline to claim?", "One year for public healthcare from recovery or stabilisation of injuries."),
                ("Do I need an expert?", "Yes, the expert report is the key evidence in these cases."),
            ],
        }),
    },
    ServiceTemplate {
        id: "derecho-familia",
        es: TemplateLocale {
            name: "Abogados de familia",
            description: "Custodia, pensiones, régimen de visitas y modificación de medidas.",
            long_description: "El área de derecho de familia de nuestro despacho en Murcia acompaña a las familias en los momentos más delicados. Negociamos acuerdos siempre que es posible y, cuando no lo es, defendemos tus intereses y los de tus hijos ante los juzgados de Murcia.",
            sections: &[
                ("Custodia compartida", "Los tribunales valoran el interés superior del menor, la implicación de cada progenitor y la proximidad de los domicilios."),
                ("Pensión de alimentos", "Se fija en función de las necesidades de los hijos y los ingresos de los progenitores, y puede modificarse si cambian las circunstancias."),
            ],
            process: &[
                "Primera reunión y estudio de la situación familiar.",
                "Propuesta de convenio o mediación.",
                "Procedimiento judicial si no hay acuerdo.",
            ],
            faqs: &[
                ("¿Puedo modificar la pensión de alimentos?", "Sí, acreditando un cambio sustancial de circunstancias."),
                ("¿Qué pasa si no se cumple el régimen de visitas?", "Puede solicitarse la ejecución de la sentencia."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Family lawyers",
            description: "Custody, maintenance, visitation and variation of orders.",
            long_description: "The family law team at our firm in Murcia supports families through their most delicate moments. We negotiate agreements whenever possible and, when it is not, defend your interests and your children's before the courts of Murcia.",
            sections: &[
                ("Joint custody", "Courts weigh the best interests of the child, each parent's involvement and how close the homes are."),
                ("Child maintenance", "Set according to the children's needs and the parents' income, and it can be varied if circumstances change."),
            ],
            process: &[
                "First meeting and review of the family situation.",
                "Draft agreement or mediation.",
                "Court proceedings if there is no agreement.",
            ],
            faqs: &[
                ("Can I change child maintenance?", "Yes, by proving a substantial change in circumstances."),
                ("What if visitation is not respected?", "You can apply for enforcement of the judgment."),
            ],
        }),
    },
    ServiceTemplate {
        id: "divorcios",
        es: TemplateLocale {
            name: "Abogados de divorcio",
            description: "Divorcios contenciosos con la máxima defensa de tus intereses.",
            long_description: "Somos abogados de divorcio en Murcia con amplia experiencia en procedimientos contenciosos. Defendemos tu posición en la liquidación de gananciales, el uso de la vivienda y la custodia ante los juzgados de familia de Murcia.",
            sections: &[
                ("Divorcio contencioso", "Cuando no existe acuerdo, es el juez quien decide sobre custodia, pensiones y vivienda."),
                ("Liquidación de la sociedad de gananciales", "Inventariamos y valoramos los bienes comunes para un reparto equitativo."),
            ],
            process: &[
                "Estudio del caso y estrategia.",
                "Presentación de la demanda de divorcio.",
                "Juicio y, en su caso, recurso.",
            ],
            faqs: &[
                ("¿Cuánto tarda un divorcio contencioso?", "Entre seis meses y un año y medio, según la carga del juzgado."),
                ("¿Quién se queda con la vivienda?", "Suele atribuirse al progenitor custodio mientras los hijos sean menores."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Divorce lawyers",
            description: "Contested divorces with a strong defence of your interests.",
            long_description: "We are divorce lawyers in Murcia with broad experience in contested proceedings. We defend your position on division of marital property, use of the family home and custody before the family courts of Murcia.",
            sections: &[
                ("Contested divorce", "When there is no agreement, the judge decides on custody, maintenance and the home."),
                ("Division of marital property", "We list and value shared assets for a fair split."),
            ],
            process: &[
                "Case review and strategy.",
                "Filing the divorce petition.",
                "Trial and, where needed, appeal.",
            ],
            faqs: &[
                ("How long does a contested divorce take?", "Between six months and eighteen months, depending on the court's workload."),
                ("Who keeps the home?", "It is usually awarded to the custodial parent while the children are minors."),
            ],
        }),
    },
    ServiceTemplate {
        id: "divorcios-mutuo-acuerdo",
        es: TemplateLocale {
            name: "Divorcio de mutuo acuerdo",
            description: "Divorcio rápido y económico cuando ambos cónyuges están de acuerdo.",
            long_description: "Tramitamos divorcios de mutuo acuerdo en Murcia de forma ágil, con un único abogado para ambos cónyuges si así lo preferís. Redactamos el convenio regulador y lo presentamos ante el juzgado o el notario de Murcia que corresponda.",
            sections: &[
                ("Convenio regulador", "Recoge la custodia, las pensiones, el uso de la vivienda y el reparto de bienes acordados por ambos."),
                ("Divorcio ante notario", "Sin hijos menores, el divorcio puede formalizarse ante notario en pocas semanas."),
            ],
            process: &[
                "Reunión con ambos cónyuges.",
                "Redacción del convenio regulador.",
                "Firma y ratificación.",
                "Sentencia o escritura de divorcio.",
            ],
            faqs: &[
                ("¿Podemos compartir abogado?", "Sí, en el divorcio de mutuo acuerdo un mismo abogado puede representar a ambos."),
                ("¿Cuánto tarda?", "Entre uno y tres meses en la mayoría de los casos."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Uncontested divorce",
            description: "Fast, affordable divorce when both spouses agree.",
            long_description: "We handle uncontested divorces in Murcia quickly, with a single lawyer for both spouses if you prefer. We draft the settlement agreement and file it with the relevant court or notary in Murcia.",
            sections: &[
                ("Settlement agreement", "Sets out custody, maintenance, use of the home and division of assets agreed by both spouses."),
                ("Divorce before a notary", "Without minor children, the divorce can be formalised before a notary within weeks."),
            ],
            process: &[
                "Meeting with both spouses.",
                "Drafting the settlement agreement.",
                "Signing and ratification.",
                "Divorce judgment or deed.",
            ],
            faqs: &[
                ("Can we share a lawyer?", "Yes, in an uncontested divorce one lawyer can represent both spouses."),
                ("How long does it take?", "Between one and three months in most cases."),
            ],
        }),
    },
    ServiceTemplate {
        id: "herencias",
        es: TemplateLocale {
            name: "Abogados de herencias",
            description: "Testamentos, particiones y reclamación de legítimas.",
            long_description: "En nuestro despacho de Murcia resolvemos herencias de forma amistosa siempre que es posible. Tramitamos declaraciones de herederos, particiones y liquidación del impuesto de sucesiones ante la administración tributaria de Murcia.",
            sections: &[
                ("Herencia sin testamento", "Si no hay testamento, es necesaria una declaración de herederos abintestato."),
                ("Reclamación de la legítima", "Los herederos forzosos pueden reclamar la parte de la herencia que la ley les reserva."),
            ],
            process: &[
                "Recopilación de certificados de defunción y últimas voluntades.",
                "Inventario y valoración del caudal hereditario.",
                "Partición y adjudicación.",
                "Liquidación de impuestos e inscripción.",
            ],
            faqs: &[
                ("¿Puedo renunciar a una herencia?", "Sí, mediante escritura pública ante notario."),
                ("¿Qué plazo hay para pagar el impuesto?", "Seis meses desde el fallecimiento, prorrogables a solicitud."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Inheritance lawyers",
            description: "Wills, estate division and forced heirship claims.",
            long_description: "At our firm in Murcia we settle estates amicably whenever possible. We handle declarations of heirs, estate divisions and inheritance tax returns before the tax authority of Murcia.",
            sections: &[
                ("Intestate succession", "Without a will, a declaration of intestate heirs is required."),
                ("Forced heirship claims", "Forced heirs can claim the share of the estate the law reserves for them."),
            ],
            process: &[
                "Collecting death and last will certificates.",
                "Inventory and valuation of the estate.",
                "Division and allocation.",
                "Tax settlement and registration.",
            ],
            faqs: &[
                ("Can I renounce an inheritance?", "Yes, by public deed before a notary."),
                ("What is the deadline to pay the tax?", "Six months from the death, extendable on request."),
            ],
        }),
    },
    ServiceTemplate {
        id: "despidos",
        es: TemplateLocale {
            name: "Abogados laboralistas para despidos",
            description: "Impugnamos despidos improcedentes y nulos y calculamos tu indemnización.",
            long_description: "Nuestros abogados laboralistas en Murcia revisan tu carta de despido en menos de 24 horas. Representamos a trabajadores de Murcia en la conciliación y ante el Juzgado de lo Social.",
            sections: &[
                ("Despido improcedente", "La indemnización es de 33 días de salario por año trabajado, con un máximo de 24 mensualidades."),
                ("Despido nulo", "Si el despido vulnera derechos fundamentales, el trabajador debe ser readmitido con abono de salarios."),
            ],
            process: &[
                "Análisis de la carta de despido.",
                "Papeleta de conciliación.",
                "Demanda ante el Juzgado de lo Social.",
            ],
            faqs: &[
                ("¿Cuánto tiempo tengo para impugnar?", "Veinte días hábiles desde la fecha del despido."),
                ("¿Debo firmar la carta de despido?", "Puedes firmarla como recibí y no conforme."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Wrongful dismissal lawyers",
            description: "We challenge unfair and void dismissals and calculate your compensation.",
            long_description: "Our employment lawyers in Murcia review your dismissal letter within 24 hours. We represent workers in Murcia at conciliation and before the Labour Court.",
            sections: &[
                ("Unfair dismissal", "Compensation is 33 days' salary per year worked, up to 24 months' pay."),
                ("Void dismissal", "If the dismissal breaches fundamental rights, the worker must be reinstated with back pay."),
            ],
            process: &[
                "Review of the dismissal letter.",
                "Conciliation filing.",
                "Lawsuit before the Labour Court.",
            ],
            faqs: &[
                ("How long do I have to challenge it?", "Twenty working days from the dismissal date."),
                ("Should I sign the dismissal letter?", "You can sign it as received but not agreed."),
            ],
        }),
    },
    ServiceTemplate {
        id: "derecho-penal",
        es: TemplateLocale {
            name: "Abogados penalistas",
            description: "Defensa penal en todas las fases del procedimiento, con asistencia urgente.",
            long_description: "Nuestro equipo de abogados penalistas en Murcia ofrece asistencia al detenido las 24 horas. Defendemos a nuestros clientes en juicios rápidos, procedimientos abreviados y ante la Audiencia Provincial de Murcia.",
            sections: &[
                ("Asistencia al detenido", "Acudimos a comisaría o al juzgado de guardia para asistir desde el primer momento."),
                ("Acusación particular", "También representamos a víctimas que quieren ejercer la acusación en el proceso penal."),
            ],
            process: &[
                "Asistencia inmediata y estudio de la causa.",
                "Diligencias de instrucción.",
                "Juicio oral.",
                "Recursos.",
            ],
            faqs: &[
                ("¿Tengo que declarar?", "Tienes derecho a no declarar y a hacerlo solo ante el juez."),
                ("¿Qué es un juicio rápido?", "Un procedimiento para delitos leves o flagrantes que se resuelve en días."),
            ],
        },
        en: Some(TemplateLocale {
            name: "Criminal defense lawyers",
            description: "Criminal defense at every stage of proceedings, with urgent assistance.",
            long_description: "Our criminal defense team in Murcia provides 24-hour assistance to people under arrest. We defend clients in fast-track trials, abbreviated proceedings and before the Provincial Court of Murcia.",
            sections: &[
                ("Assistance on arrest", "We attend the police station or duty court to assist from the very first moment."),
                ("Private prosecution", "We also represent victims who wish to take part as prosecutors in criminal proceedings."),
            ],
            process: &[
                "Immediate assistance and case review.",
                "Pre-trial investigation.",
                "Trial.",
                "Appeals.",
            ],
            faqs: &[
                ("Do I have to make a statement?", "You have the right to remain silent and to speak only before the judge."),
                ("What is a fast-track trial?", "A procedure for minor or flagrant offences that is resolved within days."),
            ],
        }),
    },
    ServiceTemplate {
        id: "derecho-penal-economico",
        es: TemplateLocale {
            name: "Abogados de derecho penal económico",
            description: "Defensa en delitos fiscales, estafas, apropiación indebida y blanqueo.",
            long_description: "Asesoramos a empresas y directivos de Murcia en procedimientos por delitos económicos. Nuestro equipo en Murcia combina conocimiento penal, fiscal y contable para construir la defensa.",
            sections: &[
                ("Compliance penal", "Diseñamos modelos de prevención de delitos que pueden eximir de responsabilidad a la persona jurídica."),
                ("Delito fiscal", "Se comete cuando la cuota defraudada supera 120.000 euros por ejercicio."),
            ],
            process: &[
                "Análisis documental y contable.",
                "Estrategia de defensa y peritajes.",
                "Instrucción y juicio.",
            ],
            faqs: &[
                ("¿Puede una empresa ser condenada?", "Sí, las personas jurídicas responden penalmente por determinados delitos."),
                ("¿Sirve regularizar la deuda?", "La regularización completa antes de la inspección puede evitar la responsabilidad penal."),
            ],
        },
        en: None,
    },
];
